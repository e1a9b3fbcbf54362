use super::Lower;
use crate::validate::{ColumnRef, ResolvedField, ResolvedGroup, ResolvedOrder, Transform};

use quarry_core::schema::ForeignKey;
use quarry_sql::{
    stmt::{Expr, Ident, OrderBy, SelectItem, TableRef},
    Select,
};

impl Lower<'_> {
    pub(super) fn field(&mut self, field: &ResolvedField<'_>) -> SelectItem {
        let expr = self.transformed(&field.column, field.transform);

        let alias = match (&field.alias, &field.column) {
            (Some(alias), _) => Some(alias.as_str()),
            (None, ColumnRef::Relation { name, .. }) => Some(*name),
            (None, ColumnRef::Direct { .. }) => None,
        };

        match alias {
            Some(alias) => SelectItem::aliased(expr, alias),
            None => SelectItem::new(expr),
        }
    }

    pub(super) fn group(&mut self, group: &ResolvedGroup<'_>) -> Expr {
        self.transformed(&group.column, group.transform)
    }

    pub(super) fn order(&mut self, order: &ResolvedOrder<'_>) -> OrderBy {
        OrderBy {
            expr: self.transformed(&order.column, order.transform),
            direction: order.direction,
        }
    }

    fn transformed(&mut self, column: &ColumnRef<'_>, transform: Option<Transform>) -> Expr {
        let expr = self.value_of(column);

        match transform {
            Some(transform) => {
                let row_key = Expr::column(&self.base, self.config.key_column.as_str());
                transform.apply(expr, row_key)
            }
            None => expr,
        }
    }

    /// The expression a column is shown as: the display column of the
    /// referenced row(s) for relationships, the stored value otherwise.
    fn value_of(&mut self, column: &ColumnRef<'_>) -> Expr {
        match column {
            ColumnRef::Direct { name, .. } => Expr::column(&self.base, *name),
            ColumnRef::Relation { foreign_key, .. } if foreign_key.is_array() => {
                self.display_array(*foreign_key)
            }
            ColumnRef::Relation { foreign_key, .. } => {
                let alias = self
                    .joins
                    .require(*foreign_key, &self.base, &self.config.key_column);
                Expr::column(&alias, foreign_key.display_column)
            }
        }
    }

    /// `ARRAY(SELECT alias.display FROM target AS alias WHERE alias.id =
    /// ANY(base.column))`
    fn display_array(&self, foreign_key: &'static ForeignKey) -> Expr {
        let alias = Ident::new(foreign_key.join_alias);

        let mut query = Select::new(
            TableRef::aliased(foreign_key.target_table, foreign_key.join_alias),
            vec![SelectItem::new(Expr::column(&alias, foreign_key.display_column))],
        );
        query.and_filter(Expr::any(
            Expr::column(&alias, self.config.key_column.as_str()),
            Expr::column(&self.base, foreign_key.source_column),
        ));

        Expr::array(query)
    }
}
