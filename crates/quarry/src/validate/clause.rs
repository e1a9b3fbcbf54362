//! Grouping and ordering keys.

use super::{field, ColumnRef, Scope, Transform, TransformKind};
use quarry_core::{
    descriptor::{GroupSpec, OrderSpec},
    Error, Result,
};
use quarry_sql::stmt::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGroup<'a> {
    pub column: ColumnRef<'a>,
    pub transform: Option<Transform>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOrder<'a> {
    pub column: ColumnRef<'a>,
    pub transform: Option<Transform>,
    pub direction: Direction,
}

/// Validates a `groupByClause`. Only row-level transforms may group.
pub fn group_by<'a>(specs: &[GroupSpec], scope: &Scope<'a>) -> Result<Vec<ResolvedGroup<'a>>> {
    if specs.is_empty() {
        return Err(Error::invalid_group_by(
            "at least one grouping key is required",
        ));
    }

    specs
        .iter()
        .map(|spec| {
            let (column, transform) = key(scope, &spec.target, &spec.transform, &[TransformKind::Scalar])
                .map_err(Error::invalid_group_by)?;

            Ok(ResolvedGroup { column, transform })
        })
        .collect()
}

/// Validates an `orderByClause`. Keys may be aggregated but not windowed.
pub fn order_by<'a>(specs: &[OrderSpec], scope: &Scope<'a>) -> Result<Vec<ResolvedOrder<'a>>> {
    if specs.is_empty() {
        return Err(Error::invalid_order_by(
            "at least one ordering key is required",
        ));
    }

    specs
        .iter()
        .map(|spec| {
            let (column, transform) = key(
                scope,
                &spec.target,
                &spec.transform,
                &[TransformKind::Scalar, TransformKind::Aggregate],
            )
            .map_err(Error::invalid_order_by)?;

            let direction = match spec.direction.as_str() {
                "ASC" => Direction::Asc,
                "DESC" => Direction::Desc,
                other => {
                    return Err(Error::invalid_order_by(format!(
                        "direction of `{}` must be ASC or DESC; got {other:?}",
                        spec.target
                    )))
                }
            };

            Ok(ResolvedOrder {
                column,
                transform,
                direction,
            })
        })
        .collect()
}

fn key<'a>(
    scope: &Scope<'a>,
    target: &str,
    transform: &str,
    allowed: &[TransformKind],
) -> std::result::Result<(ColumnRef<'a>, Option<Transform>), String> {
    let column = field::column(scope, target).map_err(|reason| format!("invalid target `{target}`: {reason}"))?;

    let transform = Transform::parse(transform)?;

    if let Some(transform) = transform {
        if !allowed.contains(&transform.kind()) {
            return Err(format!(
                "transform `{transform}` cannot be applied to `{target}` here"
            ));
        }
    }

    Ok((column, transform))
}
