use super::{Comma, Delimited, Formatter, Params, ToSql};

use crate::stmt::{self, Expr};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use Expr::*;

        match self {
            Any(expr) => {
                let lhs = &*expr.lhs;
                let array = &*expr.array;
                fmt!(f, lhs " = ANY(" array ")");
            }
            And(operands) => {
                fmt!(f, "(" Delimited(operands, " AND ") ")");
            }
            Array(query) => {
                let query = &**query;
                fmt!(f, "ARRAY(" query ")");
            }
            BinaryOp(expr) => {
                let lhs = &*expr.lhs;
                let rhs = &*expr.rhs;
                fmt!(f, lhs " " expr.op " " rhs);
            }
            Case(expr) => {
                let when = &*expr.when;
                let then = &*expr.then;
                let otherwise = &*expr.otherwise;
                fmt!(f, "CASE WHEN " when " THEN " then " ELSE " otherwise " END");
            }
            Cast(expr) => {
                let inner = &*expr.expr;
                fmt!(f, "CAST(" inner " AS " expr.ty ")");
            }
            Column(column) => {
                if let Some(qualifier) = &column.qualifier {
                    fmt!(f, qualifier ".");
                }
                fmt!(f, &column.name);
            }
            CountStar => fmt!(f, "COUNT(*)"),
            Distinct(expr) => {
                let expr = &**expr;
                fmt!(f, "DISTINCT " expr);
            }
            Exists(expr) => {
                let query = &*expr.query;
                let keyword = if expr.negate { "NOT EXISTS (" } else { "EXISTS (" };
                fmt!(f, keyword query ")");
            }
            Extract(expr) => {
                let inner = &*expr.expr;
                fmt!(f, "EXTRACT(" expr.field " FROM " inner ")");
            }
            Func(func) => {
                fmt!(f, func.name "(" Comma(&func.args) ")");
            }
            InSubquery(expr) => {
                let lhs = &*expr.expr;
                let query = &*expr.query;
                let keyword = if expr.negate { " NOT IN (" } else { " IN (" };
                fmt!(f, lhs keyword query ")");
            }
            IsNull(expr) => {
                let expr = &**expr;
                fmt!(f, expr " IS NULL");
            }
            Like(expr) => {
                let lhs = &*expr.expr;
                let pattern = &*expr.pattern;
                let keyword = if expr.negate { " NOT ILIKE " } else { " ILIKE " };
                fmt!(f, lhs keyword pattern);
            }
            Literal(literal) => literal.to_sql(f),
            Not(expr) => {
                let expr = &**expr;
                fmt!(f, "NOT (" expr ")");
            }
            Or(operands) => {
                fmt!(f, "(" Delimited(operands, " OR ") ")");
            }
            Value(value) => value.to_sql(f),
            Window(window) => {
                let order_by = &*window.order_by;
                fmt!(f, window.name "(" Comma(&window.args) ") OVER (ORDER BY " order_by ")");
            }
        }
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Ne => "<>",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
        })
    }
}
