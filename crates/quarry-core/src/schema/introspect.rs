use super::SchemaEntry;
use crate::Result;

/// A relational metadata source the catalog is loaded from.
///
/// Implementations issue a single metadata query covering every allowed
/// table, skip denied columns, and return entries ordered by table and then
/// by column position.
#[async_trait::async_trait]
pub trait Introspect: Send + Sync {
    async fn introspect(
        &self,
        allowed_tables: &[String],
        denied_columns: &[String],
    ) -> Result<Vec<SchemaEntry>>;
}
