mod filter;

mod join;
use join::JoinSet;

mod projection;

mod resolved;
pub use resolved::{CompiledStatement, ResolvedQuery};

use crate::{
    validate::{self, ResolvedField, Scope, Transform, TransformKind},
    Config, Pagination,
};

use quarry_core::{
    descriptor::Fields, schema::ForeignKeyResolver, Catalog, QueryDescriptor, Result, Value,
};
use quarry_sql::{
    stmt::{Expr, Ident, SelectItem, Source, TableRef},
    Select, Serializer,
};

/// Alias of the queried table in every compiled statement.
pub(crate) const BASE: &str = "base";

/// Alias of the grouped rows a grouped count query counts.
const GROUPED: &str = "grouped";

/// Alias of the projected rows a `DISTINCT` or aggregate count query counts.
const PROJECTED: &str = "projected";

/// Turns query descriptors into parameterized SQL.
///
/// Compilation is pure: it reads the catalog and the configuration and
/// returns either a [`ResolvedQuery`] or the first validation error. No SQL
/// text is produced for a descriptor that fails validation.
#[derive(Debug, Clone)]
pub struct Compiler {
    config: Config,
    pagination: Pagination,
    relations: ForeignKeyResolver,
    now: Option<jiff::Timestamp>,
}

/// Per-statement lowering state.
struct Lower<'a> {
    config: &'a Config,
    owner: &'a str,
    base: Ident,
    joins: JoinSet,
}

impl Compiler {
    pub fn new(config: Config) -> Result<Compiler> {
        config.verify()?;

        Ok(Compiler {
            pagination: Pagination::new(config.page_size),
            config,
            relations: ForeignKeyResolver::standard(),
            now: None,
        })
    }

    pub fn with_relations(mut self, relations: ForeignKeyResolver) -> Self {
        self.relations = relations;
        self
    }

    /// Pins the instant timestamp keywords are checked against. Defaults to
    /// the wall clock at each compile.
    pub fn with_now(mut self, now: jiff::Timestamp) -> Self {
        self.now = Some(now);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Compiles `descriptor` against `table`, scoped to `owner`.
    pub fn compile(
        &self,
        catalog: &Catalog,
        descriptor: &QueryDescriptor,
        table: &str,
        owner: &str,
    ) -> Result<ResolvedQuery> {
        self.compile_with(catalog, descriptor, table, owner, |_, _| Ok(vec![]))
    }

    /// Like [`Compiler::compile`], with extra conditions built from the
    /// validated scope and ANDed into the filter.
    pub(crate) fn compile_with(
        &self,
        catalog: &Catalog,
        descriptor: &QueryDescriptor,
        table: &str,
        owner: &str,
        extra: impl FnOnce(&Scope<'_>, &Ident) -> Result<Vec<Expr>>,
    ) -> Result<ResolvedQuery> {
        let scope = self.scope(catalog, table)?;
        let window = self.pagination.window_for(descriptor.page.as_ref())?;

        let fields = match &descriptor.fields {
            Fields::Default => validate::field::defaults(&scope),
            Fields::List(specs) => validate::field::validate_all(specs, &scope)?,
        };

        let predicate = descriptor
            .where_clause
            .as_ref()
            .map(|node| validate::predicate::validate(node, &scope))
            .transpose()?;

        let groups = descriptor
            .group_by_clause
            .as_deref()
            .map(|specs| validate::clause::group_by(specs, &scope))
            .transpose()?
            .unwrap_or_default();

        let orders = descriptor
            .order_by_clause
            .as_deref()
            .map(|specs| validate::clause::order_by(specs, &scope))
            .transpose()?
            .unwrap_or_default();

        let mut lower = Lower {
            config: &self.config,
            owner,
            base: Ident::new(BASE),
            joins: JoinSet::default(),
        };

        let extra = extra(&scope, &lower.base)?;

        let projection = fields.iter().map(|field| lower.field(field)).collect();
        let mut stmt = Select::new(TableRef::aliased(table, BASE), projection);

        let mut conditions = vec![];
        conditions.extend(lower.owner_filter(Some(&lower.base), table));
        conditions.extend(predicate.as_ref().map(|predicate| lower.predicate(predicate)));
        conditions.extend(extra);

        if !conditions.is_empty() {
            stmt.filter = Some(Expr::and(conditions));
        }

        stmt.group_by = groups.iter().map(|group| lower.group(group)).collect();
        stmt.order_by = orders.iter().map(|order| lower.order(order)).collect();
        stmt.joins = lower.joins.into_joins();

        let rows = if counts_projection(&fields, groups.is_empty()) {
            Rows::Projected
        } else if groups.is_empty() {
            Rows::Filtered
        } else {
            Rows::Grouped
        };
        let count = window.wants_total().then(|| count(&stmt, rows));

        stmt.limit = Some(window.limit);
        stmt.offset = Some(window.offset);

        let mut parameters = Vec::<Value>::new();
        let parts = Serializer::postgresql().serialize_parts(&stmt, &mut parameters);

        let query = ResolvedQuery::new(parts, parameters, count);

        tracing::debug!(
            table,
            page = window.page,
            parameters = query.parameters.len(),
            count = query.count.is_some(),
            "compiled query"
        );
        tracing::trace!(sql = %query.text(), "compiled query text");

        Ok(query)
    }

    pub(crate) fn scope<'a>(&self, catalog: &'a Catalog, table: &str) -> Result<Scope<'a>> {
        let scope = Scope::new(catalog, table)?.with_relations(self.relations);

        Ok(match self.now {
            Some(now) => scope.with_now(now),
            None => scope,
        })
    }
}

/// What the count query of a statement counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rows {
    /// Every row matching the filter.
    Filtered,

    /// One row per group.
    Grouped,

    /// The rows of the projection itself, which `DISTINCT` or an ungrouped
    /// aggregate collapse.
    Projected,
}

/// Whether the projection changes how many rows the statement returns.
fn counts_projection(fields: &[ResolvedField<'_>], ungrouped: bool) -> bool {
    fields
        .iter()
        .filter_map(|field| field.transform.map(Transform::kind))
        .any(|kind| {
            kind == TransformKind::Distinct || (ungrouped && kind == TransformKind::Aggregate)
        })
}

/// `SELECT COUNT(*)` over the rows `stmt` pages through.
fn count(stmt: &Select, rows: Rows) -> CompiledStatement {
    let total = || vec![SelectItem::aliased(Expr::CountStar, "total")];

    let derived = |query: Select, alias: &str| {
        Select::new(
            Source::Derived {
                query: Box::new(query),
                alias: Ident::new(alias),
            },
            total(),
        )
    };

    let query = match rows {
        Rows::Filtered => {
            let mut query = Select::new(stmt.source.clone(), total());
            query.joins = stmt.joins.clone();
            query.filter = stmt.filter.clone();
            query
        }
        Rows::Grouped => {
            let mut grouped =
                Select::new(stmt.source.clone(), vec![SelectItem::new(Expr::integer(1))]);
            grouped.joins = stmt.joins.clone();
            grouped.filter = stmt.filter.clone();
            grouped.group_by = stmt.group_by.clone();

            derived(grouped, GROUPED)
        }
        Rows::Projected => {
            let mut projected = stmt.clone();
            projected.order_by.clear();
            projected.limit = None;
            projected.offset = None;

            derived(projected, PROJECTED)
        }
    };

    let mut parameters = Vec::<Value>::new();
    let text = Serializer::postgresql().serialize(&query, &mut parameters);

    CompiledStatement { text, parameters }
}
