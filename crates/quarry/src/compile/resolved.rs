use quarry_core::Value;
use quarry_sql::SelectParts;

/// A compiled listing or search query, one SQL string per clause.
///
/// Clause strings contain only quoted identifiers, engine constants, and
/// `$n` placeholders; every caller-supplied value is in `parameters`, in
/// placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    pub select_sql: String,
    pub from_sql: String,
    pub join_sql: Vec<String>,
    pub where_sql: Option<String>,
    pub group_by_sql: Option<String>,
    pub order_by_sql: Option<String>,
    pub limit: u64,
    pub offset: u64,
    pub parameters: Vec<Value>,

    /// Total row count of the unpaginated result, issued with the first page
    /// only.
    pub count: Option<CompiledStatement>,
}

/// A complete SQL statement and its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStatement {
    pub text: String,
    pub parameters: Vec<Value>,
}

impl ResolvedQuery {
    pub(crate) fn new(
        parts: SelectParts,
        parameters: Vec<Value>,
        count: Option<CompiledStatement>,
    ) -> ResolvedQuery {
        ResolvedQuery {
            select_sql: parts.select,
            from_sql: parts.from,
            join_sql: parts.joins,
            where_sql: parts.filter,
            group_by_sql: parts.group_by,
            order_by_sql: parts.order_by,
            limit: parts.limit.unwrap_or_default(),
            offset: parts.offset.unwrap_or_default(),
            parameters,
            count,
        }
    }

    /// The full query text.
    pub fn text(&self) -> String {
        SelectParts {
            select: self.select_sql.clone(),
            from: self.from_sql.clone(),
            joins: self.join_sql.clone(),
            filter: self.where_sql.clone(),
            group_by: self.group_by_sql.clone(),
            order_by: self.order_by_sql.clone(),
            limit: Some(self.limit),
            offset: Some(self.offset),
        }
        .to_sql()
    }

    pub fn statement(&self) -> CompiledStatement {
        CompiledStatement {
            text: self.text(),
            parameters: self.parameters.clone(),
        }
    }

    pub fn wants_total(&self) -> bool {
        self.count.is_some()
    }
}
