use super::{Expr, Ident};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub projection: Vec<SelectItem>,

    pub source: Source,

    /// Joined tables. Always emitted as `LEFT JOIN` so that rows whose
    /// relationship column is null are kept.
    pub joins: Vec<Join>,

    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    pub order_by: Vec<OrderBy>,

    pub limit: Option<u64>,

    pub offset: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<Ident>,
}

/// What a `SELECT` reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Table(TableRef),

    /// `(SELECT ...) AS alias`
    Derived { query: Box<Select>, alias: Ident },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub name: Ident,
    pub alias: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: TableRef,
    pub on: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub expr: Expr,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Select {
    /// `SELECT ... FROM source` with nothing else set.
    pub fn new(source: impl Into<Source>, projection: Vec<SelectItem>) -> Select {
        Select {
            projection,
            source: source.into(),
            joins: vec![],
            filter: None,
            group_by: vec![],
            order_by: vec![],
            limit: None,
            offset: None,
        }
    }

    /// Adds `expr` to the filter, combining with any existing filter using
    /// `AND`.
    pub fn and_filter(&mut self, expr: Expr) {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and([existing, expr]),
            None => expr,
        });
    }
}

impl SelectItem {
    pub fn new(expr: Expr) -> SelectItem {
        SelectItem { expr, alias: None }
    }

    pub fn aliased(expr: Expr, alias: impl Into<Ident>) -> SelectItem {
        SelectItem {
            expr,
            alias: Some(alias.into()),
        }
    }
}

impl TableRef {
    pub fn new(name: impl Into<Ident>) -> TableRef {
        TableRef {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<Ident>, alias: impl Into<Ident>) -> TableRef {
        TableRef {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// The name columns of this table are qualified with.
    pub fn qualifier(&self) -> &Ident {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

impl From<TableRef> for Source {
    fn from(value: TableRef) -> Self {
        Source::Table(value)
    }
}
