use quarry_core::{
    schema::{Catalog, ForeignKey, ForeignKeyResolver, Table, TypeTag},
    Error, Result,
};

/// The table a descriptor is validated against, with everything the
/// validators consult while resolving targets.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    catalog: &'a Catalog,
    table: &'a Table,
    relations: ForeignKeyResolver,
    now: jiff::Timestamp,
}

/// A validated reference to a column of the queried table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnRef<'a> {
    /// A plain column, compared and projected as stored.
    Direct { name: &'a str, ty: TypeTag },

    /// A relationship column whose referenced rows are shown and searched
    /// through their display column.
    Relation {
        name: &'a str,
        ty: TypeTag,
        foreign_key: &'static ForeignKey,
    },
}

impl<'a> Scope<'a> {
    /// Scopes validation to `table`. Fails with `UnknownTable` if the
    /// catalog does not know the table.
    pub fn new(catalog: &'a Catalog, table: &str) -> Result<Scope<'a>> {
        let Some(table) = catalog.table(table) else {
            return Err(Error::unknown_table(table));
        };

        Ok(Scope {
            catalog,
            table,
            relations: ForeignKeyResolver::standard(),
            now: jiff::Timestamp::now(),
        })
    }

    pub fn with_relations(mut self, relations: ForeignKeyResolver) -> Self {
        self.relations = relations;
        self
    }

    /// Sets the instant timestamp keywords must not be after.
    pub fn with_now(mut self, now: jiff::Timestamp) -> Self {
        self.now = now;
        self
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn now(&self) -> jiff::Timestamp {
        self.now
    }

    /// Resolves `column` on the queried table.
    ///
    /// A column with a relationship mapping is only treated as a relationship
    /// when the referenced table is itself in the catalog; otherwise it is an
    /// ordinary column.
    pub fn resolve(&self, column: &str) -> Option<ColumnRef<'a>> {
        let (name, ty) = self.table.columns().find(|(name, _)| *name == column)?;

        match self.relations.resolve(name) {
            Some(foreign_key)
                if self
                    .catalog
                    .table(foreign_key.target_table)
                    .is_some_and(|target| target.contains(foreign_key.display_column)) =>
            {
                Some(ColumnRef::Relation {
                    name,
                    ty,
                    foreign_key,
                })
            }
            _ => Some(ColumnRef::Direct { name, ty }),
        }
    }
}

impl<'a> ColumnRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            ColumnRef::Direct { name, .. } | ColumnRef::Relation { name, .. } => *name,
        }
    }

    /// The stored type of the column.
    pub fn ty(&self) -> TypeTag {
        match self {
            ColumnRef::Direct { ty, .. } | ColumnRef::Relation { ty, .. } => *ty,
        }
    }

    /// The type predicates compare against. Relationship columns are searched
    /// by their display text.
    pub fn operand_ty(&self) -> TypeTag {
        match self {
            ColumnRef::Direct { ty, .. } => *ty,
            ColumnRef::Relation { .. } => TypeTag::Text,
        }
    }

    pub fn foreign_key(&self) -> Option<&'static ForeignKey> {
        match self {
            ColumnRef::Direct { .. } => None,
            ColumnRef::Relation { foreign_key, .. } => Some(*foreign_key),
        }
    }
}
