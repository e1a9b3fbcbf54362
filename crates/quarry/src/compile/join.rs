use quarry_core::schema::ForeignKey;
use quarry_sql::stmt::{Expr, Ident, Join, TableRef};

use indexmap::IndexMap;

/// The joins a statement needs, one per relationship alias, in the order
/// they were first required.
#[derive(Debug, Default)]
pub(super) struct JoinSet {
    joins: IndexMap<&'static str, Join>,
}

impl JoinSet {
    /// Requires a `LEFT JOIN` of the table `foreign_key` points at and returns
    /// the alias its columns are qualified with.
    pub(super) fn require(&mut self, foreign_key: &'static ForeignKey, base: &Ident, key_column: &str) -> Ident {
        let alias = Ident::new(foreign_key.join_alias);

        self.joins.entry(foreign_key.join_alias).or_insert_with(|| Join {
            table: TableRef::aliased(foreign_key.target_table, foreign_key.join_alias),
            on: Expr::eq(
                Expr::column(&alias, key_column),
                Expr::column(base, foreign_key.source_column),
            ),
        });

        alias
    }

    pub(super) fn into_joins(self) -> Vec<Join> {
        self.joins.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::schema::ForeignKeyResolver;

    #[test]
    fn joins_are_deduplicated_by_alias() {
        let relations = ForeignKeyResolver::standard();
        let base = Ident::new("base");
        let mut joins = JoinSet::default();

        for column in ["company", "client", "company"] {
            joins.require(relations.resolve(column).unwrap(), &base, "id");
        }

        let aliases: Vec<_> = joins
            .into_joins()
            .into_iter()
            .map(|join| join.table.qualifier().as_str().to_string())
            .collect();
        assert_eq!(aliases, ["co", "cl"]);
    }
}
