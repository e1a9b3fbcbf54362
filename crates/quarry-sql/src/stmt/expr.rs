use super::{Ident, Select, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `lhs = ANY(array)`
    Any(ExprAny),

    And(Vec<Expr>),

    /// `ARRAY(SELECT ...)`
    Array(Box<Select>),

    BinaryOp(ExprBinaryOp),

    /// `CASE WHEN .. THEN .. ELSE .. END`
    Case(ExprCase),

    /// `CAST(expr AS ty)`
    Cast(ExprCast),

    Column(ExprColumn),

    /// `COUNT(*)`
    CountStar,

    /// `DISTINCT expr`, only meaningful as the first projection item
    Distinct(Box<Expr>),

    /// `[NOT] EXISTS (SELECT ...)`
    Exists(ExprExists),

    /// `EXTRACT(field FROM expr)`
    Extract(ExprExtract),

    /// `NAME(args...)`
    Func(ExprFunc),

    /// `expr [NOT] IN (SELECT ...)`
    InSubquery(ExprInSubquery),

    /// `expr IS NULL`
    IsNull(Box<Expr>),

    /// `expr [NOT] ILIKE pattern`
    Like(ExprLike),

    /// An engine constant written into the SQL text.
    Literal(Literal),

    Not(Box<Expr>),

    Or(Vec<Expr>),

    /// A bound parameter.
    Value(Value),

    /// `NAME(args...) OVER (ORDER BY expr)`
    Window(ExprWindow),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAny {
    pub lhs: Box<Expr>,
    pub array: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprCase {
    pub when: Box<Expr>,
    pub then: Box<Expr>,
    pub otherwise: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    pub expr: Box<Expr>,
    pub ty: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    pub qualifier: Option<Ident>,
    pub name: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprExists {
    pub query: Box<Select>,
    pub negate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprExtract {
    pub field: &'static str,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub name: &'static str,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprInSubquery {
    pub expr: Box<Expr>,
    pub query: Box<Select>,
    pub negate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,
    pub negate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprWindow {
    pub name: &'static str,
    pub args: Vec<Expr>,
    pub order_by: Box<Expr>,
}

/// Constant SQL text. Only `'static` data can be a literal, so caller input
/// can never end up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Integer(i64),
    Text(&'static str),
}

impl Expr {
    pub fn column(qualifier: &Ident, name: impl Into<Ident>) -> Expr {
        Expr::Column(ExprColumn {
            qualifier: Some(qualifier.clone()),
            name: name.into(),
        })
    }

    pub fn unqualified(name: impl Into<Ident>) -> Expr {
        Expr::Column(ExprColumn {
            qualifier: None,
            name: name.into(),
        })
    }

    pub fn value(value: impl Into<Value>) -> Expr {
        Expr::Value(value.into())
    }

    /// Combines operands with `AND`, flattening a single operand.
    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Expr {
        let mut operands: Vec<_> = operands.into_iter().collect();
        match operands.len() {
            1 => operands.remove(0),
            _ => Expr::And(operands),
        }
    }

    /// Combines operands with `OR`, flattening a single operand.
    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Expr {
        let mut operands: Vec<_> = operands.into_iter().collect();
        match operands.len() {
            1 => operands.remove(0),
            _ => Expr::Or(operands),
        }
    }

    pub fn not(expr: Expr) -> Expr {
        Expr::Not(Box::new(expr))
    }

    pub fn binary_op(lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
        Expr::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }

    pub fn eq(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn func(name: &'static str, args: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Func(ExprFunc {
            name,
            args: args.into_iter().collect(),
        })
    }

    pub fn window(name: &'static str, args: Vec<Expr>, order_by: Expr) -> Expr {
        Expr::Window(ExprWindow {
            name,
            args,
            order_by: Box::new(order_by),
        })
    }

    pub fn extract(field: &'static str, expr: Expr) -> Expr {
        Expr::Extract(ExprExtract {
            field,
            expr: Box::new(expr),
        })
    }

    pub fn cast(expr: Expr, ty: &'static str) -> Expr {
        Expr::Cast(ExprCast {
            expr: Box::new(expr),
            ty,
        })
    }

    pub fn case(when: Expr, then: Expr, otherwise: Expr) -> Expr {
        Expr::Case(ExprCase {
            when: Box::new(when),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        })
    }

    pub fn ilike(expr: Expr, pattern: Expr) -> Expr {
        Expr::Like(ExprLike {
            expr: Box::new(expr),
            pattern: Box::new(pattern),
            negate: false,
        })
    }

    pub fn in_subquery(expr: Expr, query: Select) -> Expr {
        Expr::InSubquery(ExprInSubquery {
            expr: Box::new(expr),
            query: Box::new(query),
            negate: false,
        })
    }

    pub fn exists(query: Select) -> Expr {
        Expr::Exists(ExprExists {
            query: Box::new(query),
            negate: false,
        })
    }

    pub fn any(lhs: Expr, array: Expr) -> Expr {
        Expr::Any(ExprAny {
            lhs: Box::new(lhs),
            array: Box::new(array),
        })
    }

    pub fn array(query: Select) -> Expr {
        Expr::Array(Box::new(query))
    }

    pub fn distinct(expr: Expr) -> Expr {
        Expr::Distinct(Box::new(expr))
    }

    pub fn is_null(expr: Expr) -> Expr {
        Expr::IsNull(Box::new(expr))
    }

    pub fn integer(value: i64) -> Expr {
        Expr::Literal(Literal::Integer(value))
    }

    pub fn text(value: &'static str) -> Expr {
        Expr::Literal(Literal::Text(value))
    }
}
