#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod value;

use crate::stmt::Select;

/// Serialize a statement to a PostgreSQL query string.
///
/// Every [`Value`](crate::stmt::Value) in the tree is pushed to the caller's
/// [`Params`] and replaced by a `$n` placeholder; identifiers are quoted.
/// Placeholders are numbered in the order they appear in the text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

/// A serialized `SELECT`, one string per clause.
///
/// Clauses that the statement does not have are `None` (or empty, for
/// joins). [`SelectParts::to_sql`] assembles the full query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectParts {
    pub select: String,
    pub from: String,
    pub joins: Vec<String>,
    pub filter: Option<String>,
    pub group_by: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn postgresql() -> Serializer {
        Serializer { _priv: () }
    }

    pub fn serialize(&self, stmt: &Select, params: &mut impl Params) -> String {
        self.serialize_parts(stmt, params).to_sql()
    }

    pub fn serialize_parts<P: Params>(&self, stmt: &Select, params: &mut P) -> SelectParts {
        let select = section(params, |f| statement::projection(stmt, f));
        let from = section(params, |f| statement::source(stmt, f));
        let joins = stmt
            .joins
            .iter()
            .map(|join| section(params, |f| join.to_sql(f)))
            .collect();
        let filter = stmt
            .filter
            .as_ref()
            .map(|filter| section(params, |f| fmt!(f, "WHERE " filter)));
        let group_by = (!stmt.group_by.is_empty())
            .then(|| section(params, |f| fmt!(f, "GROUP BY " Comma(&stmt.group_by))));
        let order_by = (!stmt.order_by.is_empty())
            .then(|| section(params, |f| fmt!(f, "ORDER BY " Comma(&stmt.order_by))));

        SelectParts {
            select,
            from,
            joins,
            filter,
            group_by,
            order_by,
            limit: stmt.limit,
            offset: stmt.offset,
        }
    }
}

fn section<P: Params>(params: &mut P, render: impl FnOnce(&mut Formatter<'_, P>)) -> String {
    let mut dst = String::new();
    let mut f = Formatter {
        dst: &mut dst,
        params,
    };
    render(&mut f);
    dst
}

impl SelectParts {
    pub fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.select, self.from);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        for clause in [&self.filter, &self.group_by, &self.order_by]
            .into_iter()
            .flatten()
        {
            sql.push(' ');
            sql.push_str(clause);
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        sql
    }
}
