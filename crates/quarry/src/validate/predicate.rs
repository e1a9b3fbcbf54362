use super::{field, keyword, ColumnRef, Operator, Scope};
use quarry_core::{
    descriptor::{BooleanOp, LeafNode, PredicateNode},
    schema::{TypeTag, UnitPairing},
    Error, Result, Value,
};

/// A filter tree that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedPredicate<'a> {
    And(Vec<ResolvedPredicate<'a>>),
    Or(Vec<ResolvedPredicate<'a>>),
    Leaf(ResolvedLeaf<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLeaf<'a> {
    pub column: ColumnRef<'a>,
    pub operator: Operator,
    pub keyword: Keyword,
}

/// A keyword converted to what it is compared as.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyword {
    /// An `ILIKE` containment pattern, wildcards escaped.
    Pattern(String),

    Measure(Measure),

    Timestamp(jiff::Timestamp),
}

/// A number keyword and, when it carries a unit, the sibling columns the
/// unit is compared with.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub value: Value,

    /// The keyword as sent, for matching concatenated value and unit.
    pub raw: String,

    pub unit: Option<String>,

    /// Sibling unit columns present on the table, in matching order.
    pub unit_columns: Vec<&'static str>,

    pub dimensional: bool,
}

/// Validates a filter tree. Any invalid node rejects the whole tree.
pub fn validate<'a>(node: &PredicateNode, scope: &Scope<'a>) -> Result<ResolvedPredicate<'a>> {
    match node {
        PredicateNode::Boolean { op, children } => {
            if children.is_empty() {
                return Err(Error::invalid_predicate(format!(
                    "`{op}` requires at least one condition"
                )));
            }

            let children = children
                .iter()
                .map(|child| validate(child, scope))
                .collect::<Result<Vec<_>>>()?;

            Ok(match op {
                BooleanOp::And => ResolvedPredicate::And(children),
                BooleanOp::Or => ResolvedPredicate::Or(children),
            })
        }
        PredicateNode::Leaf(leaf) => validate_leaf(leaf, scope).map(ResolvedPredicate::Leaf),
    }
}

pub fn validate_leaf<'a>(leaf: &LeafNode, scope: &Scope<'a>) -> Result<ResolvedLeaf<'a>> {
    let (Some(target), Some(operator), Some(keyword)) = (
        present(&leaf.target),
        present(&leaf.operator),
        present(&leaf.keyword),
    ) else {
        return Err(Error::invalid_predicate(
            "a condition requires a target, an operator, and a keyword",
        ));
    };

    let column = field::column(scope, target)
        .map_err(|reason| Error::invalid_predicate(format!("invalid target `{target}`: {reason}")))?;

    let operator = Operator::parse(operator).map_err(Error::invalid_predicate)?;

    if !Operator::SEARCH.contains(&operator) {
        return Err(Error::invalid_predicate(format!(
            "operator `{operator}` cannot be used to search `{target}`"
        )));
    }

    let keyword = match column.operand_ty() {
        ty if ty.is_textual() => {
            keyword::safe_text(keyword).map_err(Error::invalid_predicate)?;
            Keyword::Pattern(keyword::contains_pattern(keyword))
        }
        ty @ (TypeTag::Numeric | TypeTag::Integer) => {
            Keyword::Measure(measure(&column, ty, keyword, scope)?)
        }
        TypeTag::Timestamp => {
            let timestamp =
                keyword::timestamp(keyword, scope.now()).map_err(Error::invalid_predicate)?;
            Keyword::Timestamp(timestamp)
        }
        ty => {
            return Err(Error::invalid_predicate(format!(
                "columns of type {ty} cannot be searched"
            )))
        }
    };

    Ok(ResolvedLeaf {
        column,
        operator,
        keyword,
    })
}

fn measure(column: &ColumnRef<'_>, ty: TypeTag, keyword: &str, scope: &Scope<'_>) -> Result<Measure> {
    let quantity = keyword::quantity(keyword).map_err(Error::invalid_predicate)?;

    let value = match ty {
        TypeTag::Integer => Value::Integer(keyword::integer(quantity.number).map_err(Error::invalid_predicate)?),
        _ => Value::Numeric(keyword::decimal(quantity.number).map_err(Error::invalid_predicate)?),
    };

    let positive = match &value {
        Value::Integer(value) => *value > 0,
        Value::Numeric(value) => !value.is_zero(),
        _ => true,
    };

    if !positive {
        return Err(Error::invalid_predicate(format!(
            "keyword {keyword:?} is not a positive number"
        )));
    }

    let pairing = UnitPairing::lookup(column.name());
    let unit_columns: Vec<&'static str> = pairing
        .map(|pairing| pairing.unit_columns())
        .unwrap_or_default()
        .iter()
        .copied()
        .filter(|unit| scope.table().contains(unit))
        .collect();

    if quantity.unit.is_some() && unit_columns.is_empty() {
        return Err(Error::invalid_predicate(format!(
            "column `{}` does not take a unit",
            column.name()
        )));
    }

    Ok(Measure {
        value,
        raw: keyword.to_string(),
        unit: quantity.unit.map(str::to_string),
        unit_columns,
        dimensional: pairing.is_some_and(UnitPairing::is_dimensional),
    })
}

fn present(part: &Option<String>) -> Option<&str> {
    part.as_deref().filter(|part| !part.is_empty())
}
