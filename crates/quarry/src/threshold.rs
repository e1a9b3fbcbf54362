//! Pricing thresholds: numeric conditions such as "quantity ge 100" that
//! select which pricing rule applies to an order.
//!
//! A threshold is validated like a search predicate but draws its operator
//! from the comparison vocabulary and only applies to numeric columns.

use crate::{
    validate::{field, keyword, Operator, Scope},
    Compiler, ResolvedQuery,
};

use quarry_core::{
    descriptor::LeafNode, schema::TypeTag, Catalog, Error, QueryDescriptor, Result, Value,
};
use quarry_sql::stmt::{Expr, Ident};
use rust_decimal::Decimal;

/// A comparison against a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub operator: Operator,
    pub amount: Decimal,
}

/// A condition bound to a numeric column of the scoped table.
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold<'a> {
    pub column: &'a str,
    pub condition: Condition,
    value: Value,
}

impl Condition {
    pub fn parse(operator: &str, keyword: &str) -> Result<Condition> {
        let operator = Operator::parse(operator).map_err(Error::invalid_threshold)?;

        if !Operator::THRESHOLD.contains(&operator) {
            return Err(Error::invalid_threshold(format!(
                "operator `{operator}` cannot be used in a threshold"
            )));
        }

        let quantity = keyword::quantity(keyword).map_err(Error::invalid_threshold)?;

        if quantity.unit.is_some() {
            return Err(Error::invalid_threshold(format!(
                "threshold {keyword:?} must be a plain number"
            )));
        }

        let amount = keyword::decimal(quantity.number).map_err(Error::invalid_threshold)?;

        Ok(Condition { operator, amount })
    }

    /// Whether `candidate` satisfies the condition.
    pub fn matches(&self, candidate: Decimal) -> bool {
        match self.operator {
            Operator::Eq => candidate == self.amount,
            Operator::Ne => candidate != self.amount,
            Operator::Gt => candidate > self.amount,
            Operator::Ge => candidate >= self.amount,
            Operator::Lt => candidate < self.amount,
            Operator::Le => candidate <= self.amount,
        }
    }
}

/// Validates a threshold condition against the scoped table.
pub fn validate<'a>(leaf: &LeafNode, scope: &Scope<'a>) -> Result<Threshold<'a>> {
    let (Some(target), Some(operator), Some(keyword)) =
        (&leaf.target, &leaf.operator, &leaf.keyword)
    else {
        return Err(Error::invalid_threshold(
            "a threshold requires a target, an operator, and a keyword",
        ));
    };

    let column = field::column(scope, target)
        .map_err(|reason| Error::invalid_threshold(format!("invalid target `{target}`: {reason}")))?;

    let ty = column.ty();
    if column.foreign_key().is_some() || !ty.is_numeric() {
        return Err(Error::invalid_threshold(format!(
            "`{target}` is not a numeric column"
        )));
    }

    let condition = Condition::parse(operator, keyword)?;

    let value = match ty {
        TypeTag::Integer => {
            let amount = i64::try_from(condition.amount)
                .ok()
                .filter(|_| condition.amount.fract().is_zero())
                .ok_or_else(|| {
                    Error::invalid_threshold(format!("`{target}` only holds whole numbers"))
                })?;
            Value::Integer(amount)
        }
        _ => Value::Numeric(condition.amount),
    };

    Ok(Threshold {
        column: column.name(),
        condition,
        value,
    })
}

impl Threshold<'_> {
    /// `base.column <op> $n`
    pub fn to_expr(&self, base: &Ident) -> Expr {
        Expr::binary_op(
            Expr::column(base, self.column),
            self.condition.operator.binary_op(),
            Expr::value(self.value.clone()),
        )
    }
}

impl Compiler {
    /// Compiles a query over `table` restricted to rows satisfying every
    /// threshold in `conditions`.
    pub fn compile_threshold(
        &self,
        catalog: &Catalog,
        descriptor: &QueryDescriptor,
        table: &str,
        owner: &str,
        conditions: &[LeafNode],
    ) -> Result<ResolvedQuery> {
        self.compile_with(catalog, descriptor, table, owner, |scope, base| {
            conditions
                .iter()
                .map(|leaf| validate(leaf, scope).map(|threshold| threshold.to_expr(base)))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn conditions_compare_amounts() {
        let ge = Condition::parse("ge", "100").unwrap();
        assert!(ge.matches(amount(100)));
        assert!(ge.matches(amount(250)));
        assert!(!ge.matches(amount(99)));

        let lt = Condition::parse("lt", "10.5").unwrap();
        assert!(lt.matches(amount(10)));
        assert!(!lt.matches(amount(11)));
    }

    #[test]
    fn search_only_operators_are_rejected() {
        let err = Condition::parse("ne", "5").unwrap_err();
        assert!(err.is_invalid_threshold());
    }

    #[test]
    fn units_and_signs_are_rejected() {
        for keyword in ["5kg", "-5", "many"] {
            let err = Condition::parse("gt", keyword).unwrap_err();
            assert!(err.is_invalid_threshold(), "{keyword}");
        }
    }
}
