use super::ident;
use quarry_sql::stmt::BinaryOp;

use std::fmt;

/// A comparison operator from the fixed operator vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Operator {
    /// Operators a search predicate may use.
    pub const SEARCH: &'static [Operator] = &[Operator::Eq, Operator::Ne];

    /// Operators a pricing threshold may use.
    pub const THRESHOLD: &'static [Operator] = &[
        Operator::Gt,
        Operator::Ge,
        Operator::Lt,
        Operator::Le,
        Operator::Eq,
    ];

    /// Maps an operator name through the operator table. The name must be a
    /// safe identifier before it is looked up.
    pub fn parse(name: &str) -> Result<Operator, String> {
        ident::check(name).map_err(|reason| format!("invalid operator: {reason}"))?;

        Ok(match name {
            "eq" => Operator::Eq,
            "ne" => Operator::Ne,
            "gt" => Operator::Gt,
            "ge" => Operator::Ge,
            "lt" => Operator::Lt,
            "le" => Operator::Le,
            _ => return Err(format!("unsupported operator `{name}`")),
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Gt => "gt",
            Operator::Ge => "ge",
            Operator::Lt => "lt",
            Operator::Le => "le",
        }
    }

    pub fn is_negation(self) -> bool {
        matches!(self, Operator::Ne)
    }

    pub fn binary_op(self) -> BinaryOp {
        match self {
            Operator::Eq => BinaryOp::Eq,
            Operator::Ne => BinaryOp::Ne,
            Operator::Gt => BinaryOp::Gt,
            Operator::Ge => BinaryOp::Ge,
            Operator::Lt => BinaryOp::Lt,
            Operator::Le => BinaryOp::Le,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_operators() {
        for op in [
            Operator::Eq,
            Operator::Ne,
            Operator::Gt,
            Operator::Ge,
            Operator::Lt,
            Operator::Le,
        ] {
            assert_eq!(Operator::parse(op.as_str()), Ok(op));
        }
    }

    #[test]
    fn rejects_unmapped_and_unsafe_names() {
        for name in ["like", "EQ", "=", "eq;", "", "between"] {
            assert!(Operator::parse(name).is_err(), "{name}");
        }
    }
}
