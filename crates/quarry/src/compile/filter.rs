use super::Lower;
use crate::validate::{ColumnRef, Keyword, ResolvedLeaf, ResolvedPredicate};
use crate::validate::predicate::Measure;

use quarry_core::schema::{ForeignKey, TypeTag};
use quarry_sql::{
    stmt::{Expr, Ident, SelectItem, TableRef},
    Select,
};

impl Lower<'_> {
    pub(super) fn predicate(&mut self, predicate: &ResolvedPredicate<'_>) -> Expr {
        match predicate {
            ResolvedPredicate::And(children) => {
                Expr::and(children.iter().map(|child| self.predicate(child)).collect::<Vec<_>>())
            }
            ResolvedPredicate::Or(children) => {
                Expr::or(children.iter().map(|child| self.predicate(child)).collect::<Vec<_>>())
            }
            ResolvedPredicate::Leaf(leaf) => self.leaf(leaf),
        }
    }

    /// `base.owner = $n` for owner-scoped tables.
    pub(super) fn owner_filter(&self, qualifier: Option<&Ident>, table: &str) -> Option<Expr> {
        if !self.config.is_owner_scoped(table) {
            return None;
        }

        let column = match qualifier {
            Some(qualifier) => Expr::column(qualifier, self.config.owner_column.as_str()),
            None => Expr::unqualified(self.config.owner_column.as_str()),
        };

        Some(Expr::eq(column, Expr::value(self.owner)))
    }

    fn leaf(&mut self, leaf: &ResolvedLeaf<'_>) -> Expr {
        let matches = match &leaf.keyword {
            Keyword::Pattern(pattern) => self.pattern(&leaf.column, pattern),
            Keyword::Measure(measure) => self.measure(leaf.column.name(), measure),
            Keyword::Timestamp(timestamp) => Expr::eq(
                Expr::column(&self.base, leaf.column.name()),
                Expr::value(*timestamp),
            ),
        };

        if leaf.operator.is_negation() {
            Expr::not(matches)
        } else {
            matches
        }
    }

    fn pattern(&self, column: &ColumnRef<'_>, pattern: &str) -> Expr {
        let pattern = Expr::value(pattern);

        match column {
            ColumnRef::Relation { foreign_key, .. } if foreign_key.is_array() => {
                self.array_relation_match(*foreign_key, pattern)
            }
            ColumnRef::Relation { foreign_key, .. } => self.relation_match(*foreign_key, pattern),
            ColumnRef::Direct { name, ty } => {
                let column = Expr::column(&self.base, *name);
                let text = match ty {
                    TypeTag::Text => column,
                    TypeTag::UuidArray => Expr::func("ARRAY_TO_STRING", [column, Expr::text(",")]),
                    _ => Expr::cast(column, "TEXT"),
                };
                Expr::ilike(text, pattern)
            }
        }
    }

    /// `base.column IN (SELECT id FROM target WHERE display ILIKE $n)`
    fn relation_match(&self, foreign_key: &'static ForeignKey, pattern: Expr) -> Expr {
        let mut query = Select::new(
            TableRef::new(foreign_key.target_table),
            vec![SelectItem::new(Expr::unqualified(self.config.key_column.as_str()))],
        );

        let mut conditions = vec![];
        conditions.extend(self.owner_filter(None, foreign_key.target_table));
        conditions.push(Expr::ilike(
            Expr::unqualified(foreign_key.display_column),
            pattern,
        ));
        query.filter = Some(Expr::and(conditions));

        Expr::in_subquery(Expr::column(&self.base, foreign_key.source_column), query)
    }

    /// `EXISTS (SELECT 1 FROM target AS a WHERE a.id = ANY(base.column) AND
    /// a.display ILIKE $n)`
    fn array_relation_match(&self, foreign_key: &'static ForeignKey, pattern: Expr) -> Expr {
        let alias = Ident::new(foreign_key.join_alias);

        let mut query = Select::new(
            TableRef::aliased(foreign_key.target_table, foreign_key.join_alias),
            vec![SelectItem::new(Expr::integer(1))],
        );
        let mut conditions = vec![
            Expr::any(
                Expr::column(&alias, self.config.key_column.as_str()),
                Expr::column(&self.base, foreign_key.source_column),
            ),
            Expr::ilike(Expr::column(&alias, foreign_key.display_column), pattern),
        ];
        conditions.extend(self.owner_filter(Some(&alias), foreign_key.target_table));
        query.filter = Some(Expr::and(conditions));

        Expr::exists(query)
    }

    fn measure(&self, column: &str, measure: &Measure) -> Expr {
        let value = Expr::eq(
            Expr::column(&self.base, column),
            Expr::value(measure.value.clone()),
        );

        let Some(unit) = &measure.unit else {
            return value;
        };

        let unit_matches = measure.unit_columns.iter().map(|unit_column| {
            Expr::eq(
                Expr::column(&self.base, *unit_column),
                Expr::value(unit.as_str()),
            )
        });

        if !measure.dimensional {
            return Expr::and(std::iter::once(value).chain(unit_matches));
        }

        // The value may be stored with either unit convention, or written
        // together with its unit.
        let concatenated = measure.unit_columns.iter().map(|unit_column| {
            Expr::eq(
                Expr::func(
                    "CONCAT",
                    [
                        Expr::column(&self.base, column),
                        Expr::column(&self.base, *unit_column),
                    ],
                ),
                Expr::value(measure.raw.as_str()),
            )
        });

        Expr::or(
            std::iter::once(Expr::and([value, Expr::or(unit_matches.collect::<Vec<_>>())]))
                .chain(concatenated)
                .collect::<Vec<_>>(),
        )
    }
}
