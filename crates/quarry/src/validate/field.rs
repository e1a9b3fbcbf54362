use super::{ident, ColumnRef, Scope, Transform, TransformKind};
use quarry_core::{descriptor::FieldSpec, schema::projection, Error, Result};

/// A projected column that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField<'a> {
    pub column: ColumnRef<'a>,
    pub transform: Option<Transform>,
    pub alias: Option<String>,
}

impl<'a> ResolvedField<'a> {
    pub fn new(column: ColumnRef<'a>) -> ResolvedField<'a> {
        ResolvedField {
            column,
            transform: None,
            alias: None,
        }
    }
}

/// Validates one requested field.
pub fn validate<'a>(spec: &FieldSpec, scope: &Scope<'a>) -> Result<ResolvedField<'a>> {
    let column = column(scope, &spec.target).map_err(|reason| Error::invalid_field(&spec.target, reason))?;

    let transform = Transform::parse(&spec.transform)
        .map_err(|reason| Error::invalid_field(&spec.target, reason))?;

    if let Some(alias) = &spec.alias {
        ident::check(alias)
            .map_err(|reason| Error::invalid_field(&spec.target, format!("invalid alias: {reason}")))?;
    }

    Ok(ResolvedField {
        column,
        transform,
        alias: spec.alias.clone(),
    })
}

/// Validates a requested field list. `distinct` may only qualify the first
/// field.
pub fn validate_all<'a>(specs: &[FieldSpec], scope: &Scope<'a>) -> Result<Vec<ResolvedField<'a>>> {
    if specs.is_empty() {
        return Err(Error::invalid_field(
            "fields",
            "at least one field is required",
        ));
    }

    let mut fields = Vec::with_capacity(specs.len());

    for (position, spec) in specs.iter().enumerate() {
        let field = validate(spec, scope)?;

        if position > 0 && field.transform.map(Transform::kind) == Some(TransformKind::Distinct) {
            return Err(Error::invalid_field(
                &spec.target,
                "`distinct` only applies to the first field",
            ));
        }

        fields.push(field);
    }

    Ok(fields)
}

/// The standard projection of the scoped table: its curated column list
/// restricted to columns the catalog knows, or every column when nothing
/// curated remains.
pub fn defaults<'a>(scope: &Scope<'a>) -> Vec<ResolvedField<'a>> {
    let curated: Vec<_> = projection::lookup(scope.table().name())
        .unwrap_or_default()
        .iter()
        .filter_map(|column| scope.resolve(column))
        .map(ResolvedField::new)
        .collect();

    if !curated.is_empty() {
        return curated;
    }

    scope
        .table()
        .columns()
        .filter_map(|(column, _)| scope.resolve(column))
        .map(ResolvedField::new)
        .collect()
}

/// Resolves a target to a column of the scoped table.
pub(crate) fn column<'a>(scope: &Scope<'a>, target: &str) -> std::result::Result<ColumnRef<'a>, String> {
    ident::check(target)?;

    scope.resolve(target).ok_or_else(|| {
        format!(
            "column does not exist on table `{}`",
            scope.table().name()
        )
    })
}
