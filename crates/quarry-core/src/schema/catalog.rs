use super::{SchemaEntry, TypeTag};
use crate::{Error, Result};

use indexmap::IndexMap;

/// The set of queryable tables and columns.
///
/// A catalog is built once from introspected [`SchemaEntry`] values and never
/// mutated afterwards, so it can be shared between concurrent compiles
/// without locking. Table and column order follow the order the entries were
/// loaded in.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    tables: IndexMap<String, Table>,
}

/// The queryable columns of one table.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: IndexMap<String, TypeTag>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate `(table, column)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = SchemaEntry>) -> Result<Catalog> {
        let mut tables = IndexMap::<String, Table>::new();

        for entry in entries {
            let table = tables
                .entry(entry.table.clone())
                .or_insert_with(|| Table {
                    name: entry.table.clone(),
                    columns: IndexMap::new(),
                });

            if table.columns.insert(entry.column.clone(), entry.ty).is_some() {
                return Err(Error::invalid_schema(format!(
                    "duplicate column `{}` on table `{}`",
                    entry.column, entry.table
                )));
            }
        }

        Ok(Catalog { tables })
    }

    pub fn exists(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> + '_ {
        self.tables.values()
    }

    /// Returns the entries of one table, or an empty list for unknown tables.
    pub fn columns_of(&self, table: &str) -> Vec<SchemaEntry> {
        self.tables
            .get(table)
            .map(|table| table.entries().collect())
            .unwrap_or_default()
    }

    pub fn type_of(&self, table: &str, column: &str) -> Option<TypeTag> {
        self.tables.get(table)?.column_type(column)
    }

    /// Flattened entries in load order.
    pub fn entries(&self) -> Vec<SchemaEntry> {
        self.tables.values().flat_map(Table::entries).collect()
    }

    /// Total number of queryable columns.
    pub fn len(&self) -> usize {
        self.tables.values().map(|table| table.columns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Table {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn column_type(&self, column: &str) -> Option<TypeTag> {
        self.columns.get(column).copied()
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = (&str, TypeTag)> + '_ {
        self.columns.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    fn entries(&self) -> impl Iterator<Item = SchemaEntry> + '_ {
        self.columns
            .iter()
            .map(|(column, ty)| SchemaEntry::new(&self.name, column, *ty))
    }
}
