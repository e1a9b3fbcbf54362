//! Relationship columns and the records they point at.
//!
//! A relationship column stores the identifier of a row in another table (or
//! an array of identifiers). The mapping below is curated by hand rather than
//! derived from foreign-key constraints because it also names the column that
//! should be *shown* for the referenced row: searching transactions by
//! `company` means searching by the company's name, not its identifier.

/// How many referenced rows one relationship column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// The column holds one identifier.
    Single,

    /// The column holds an array of identifiers.
    Array,
}

/// A relationship-bearing column and how to display what it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    /// Column on the queried table holding the identifier(s).
    pub source_column: &'static str,

    /// Table the identifiers point into.
    pub target_table: &'static str,

    /// Column on the target table shown instead of the identifier.
    pub display_column: &'static str,

    /// Alias of the target table when it is joined. Unique per mapping.
    pub join_alias: &'static str,

    pub cardinality: Cardinality,
}

impl ForeignKey {
    pub const fn single(
        source_column: &'static str,
        target_table: &'static str,
        display_column: &'static str,
        join_alias: &'static str,
    ) -> ForeignKey {
        ForeignKey {
            source_column,
            target_table,
            display_column,
            join_alias,
            cardinality: Cardinality::Single,
        }
    }

    pub const fn array(
        source_column: &'static str,
        target_table: &'static str,
        display_column: &'static str,
        join_alias: &'static str,
    ) -> ForeignKey {
        ForeignKey {
            source_column,
            target_table,
            display_column,
            join_alias,
            cardinality: Cardinality::Array,
        }
    }

    pub fn is_array(&self) -> bool {
        self.cardinality == Cardinality::Array
    }
}

/// Relationship columns of the business-records schema.
pub const STANDARD: &[ForeignKey] = &[
    ForeignKey::single("client", "clients", "full_name", "cl"),
    ForeignKey::single("company", "companies", "name", "co"),
    ForeignKey::single("employee", "employees", "full_name", "em"),
    ForeignKey::single("material", "materials", "name", "ma"),
    ForeignKey::single("product", "products", "name", "pr"),
    ForeignKey::single("supplier", "companies", "name", "su"),
    ForeignKey::array("employees", "employees", "full_name", "ems"),
    ForeignKey::array("materials", "materials", "name", "mas"),
    ForeignKey::array("products", "products", "name", "prs"),
];

/// Looks up relationship columns by name.
#[derive(Debug, Clone, Copy)]
pub struct ForeignKeyResolver {
    mappings: &'static [ForeignKey],
}

impl ForeignKeyResolver {
    pub const fn new(mappings: &'static [ForeignKey]) -> ForeignKeyResolver {
        ForeignKeyResolver { mappings }
    }

    /// The resolver for the business-records schema.
    pub const fn standard() -> ForeignKeyResolver {
        ForeignKeyResolver::new(STANDARD)
    }

    pub fn resolve(&self, column: &str) -> Option<&'static ForeignKey> {
        self.mappings
            .iter()
            .find(|mapping| mapping.source_column == column)
    }

    pub fn mappings(&self) -> &'static [ForeignKey] {
        self.mappings
    }
}

impl Default for ForeignKeyResolver {
    fn default() -> Self {
        ForeignKeyResolver::standard()
    }
}
