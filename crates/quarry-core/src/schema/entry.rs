use super::TypeTag;

use serde::{Deserialize, Serialize};

/// One queryable `(table, column, type)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub table: String,
    pub column: String,
    #[serde(rename = "type")]
    pub ty: TypeTag,
}

impl SchemaEntry {
    pub fn new(table: impl Into<String>, column: impl Into<String>, ty: TypeTag) -> SchemaEntry {
        SchemaEntry {
            table: table.into(),
            column: column.into(),
            ty,
        }
    }
}
