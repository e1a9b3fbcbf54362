use crate::validate::ident;
use quarry_core::{Error, Result};

use serde::Deserialize;
use std::time::Duration;

/// Deployment settings for the query engine.
///
/// Built with the setter methods or decoded from JSON; every field has a
/// default matching the business-records schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of rows per page
    pub page_size: u64,

    /// Column holding the owner identifier on owner-scoped tables
    pub owner_column: String,

    /// Tables shared between owners; queries on them are not owner-scoped
    pub owner_agnostic_tables: Vec<String>,

    /// Tables loaded into the schema catalog
    pub allowed_tables: Vec<String>,

    /// Columns never loaded into the schema catalog
    pub denied_columns: Vec<String>,

    /// Identifier column every relationship points at
    pub key_column: String,

    /// Upper bound on the schema introspection query, in milliseconds
    pub introspection_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 20,
            owner_column: "owner_id".to_string(),
            owner_agnostic_tables: vec![],
            allowed_tables: [
                "clients",
                "companies",
                "employees",
                "materials",
                "products",
                "pricing_rules",
                "transactions",
            ]
            .map(String::from)
            .to_vec(),
            denied_columns: [
                "owner_id",
                "password_hash",
                "secret",
                "api_key",
                "session_token",
            ]
            .map(String::from)
            .to_vec(),
            key_column: "id".to_string(),
            introspection_timeout_ms: 5_000,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|err| quarry_core::err!("invalid configuration: {err}"))?;
        config.verify()?;
        Ok(config)
    }

    /// Set the page size
    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the owner column
    pub fn owner_column(mut self, column: impl Into<String>) -> Self {
        self.owner_column = column.into();
        self
    }

    /// Mark a table as shared between owners
    pub fn owner_agnostic_table(mut self, table: impl Into<String>) -> Self {
        self.owner_agnostic_tables.push(table.into());
        self
    }

    /// Replace the allowed table list
    pub fn allowed_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tables = tables.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the denied column list
    pub fn denied_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denied_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the introspection timeout
    pub fn introspection_timeout(mut self, timeout: Duration) -> Self {
        self.introspection_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn introspection_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.introspection_timeout_ms)
    }

    pub fn is_owner_scoped(&self, table: &str) -> bool {
        !self.owner_agnostic_tables.iter().any(|t| t == table)
    }

    /// Checks the settings that end up in generated SQL.
    pub fn verify(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(quarry_core::err!("page_size must be at least 1"));
        }

        for (setting, name) in [
            ("owner_column", &self.owner_column),
            ("key_column", &self.key_column),
        ] {
            ident::check(name)
                .map_err(|reason| Error::from_args(format_args!("invalid {setting}: {reason}")))?;
        }

        Ok(())
    }
}
