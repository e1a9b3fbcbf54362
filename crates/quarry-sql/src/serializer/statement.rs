use super::{Comma, Formatter, Params, ToSql};

use crate::stmt::{Direction, Join, OrderBy, Select, SelectItem, Source, TableRef};

pub(super) fn projection<P: Params>(stmt: &Select, f: &mut Formatter<'_, P>) {
    fmt!(f, "SELECT " Comma(&stmt.projection));
}

pub(super) fn source<P: Params>(stmt: &Select, f: &mut Formatter<'_, P>) {
    let source = &stmt.source;
    fmt!(f, "FROM " source);
}

/// Serializes a nested statement (subquery) inline.
impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        projection(self, f);
        fmt!(f, " ");
        source(self, f);

        for join in &self.joins {
            fmt!(f, " " join);
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if !self.group_by.is_empty() {
            fmt!(f, " GROUP BY " Comma(&self.group_by));
        }

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order_by));
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }

        if let Some(offset) = self.offset {
            fmt!(f, " OFFSET " offset);
        }
    }
}

impl ToSql for &SelectItem {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match &self.alias {
            Some(alias) => fmt!(f, &self.expr " AS " alias),
            None => fmt!(f, &self.expr),
        }
    }
}

impl ToSql for &Source {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Source::Table(table) => fmt!(f, table),
            Source::Derived { query, alias } => {
                let query = &**query;
                fmt!(f, "(" query ") AS " alias)
            }
        }
    }
}

impl ToSql for &TableRef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match &self.alias {
            Some(alias) => fmt!(f, &self.name " AS " alias),
            None => fmt!(f, &self.name),
        }
    }
}

impl ToSql for &Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = &self.table;
        let on = &self.on;
        fmt!(f, "LEFT JOIN " table " ON " on);
    }
}

impl ToSql for &OrderBy {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let direction = match self.direction {
            Direction::Asc => " ASC",
            Direction::Desc => " DESC",
        };
        fmt!(f, &self.expr direction);
    }
}
