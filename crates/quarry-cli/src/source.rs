use anyhow::{Context, Result};
use clap::Args;
use quarry::{Catalog, Config, Engine, SchemaEntry};
use quarry_driver_postgresql::PostgreSQL;
use std::path::{Path, PathBuf};

/// Where the schema catalog comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub(crate) struct Source {
    /// PostgreSQL connection URL; the catalog is introspected from it
    #[arg(long)]
    url: Option<String>,

    /// JSON file holding `[{"table", "column", "type"}]` entries
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl Source {
    /// Builds an engine with its catalog installed. Returns the database
    /// connection when one was made.
    pub(crate) async fn engine(&self, config: Config) -> Result<(Engine, Option<PostgreSQL>)> {
        if let Some(url) = &self.url {
            let driver = PostgreSQL::connect(url).await?;
            let engine = Engine::new(config)?;
            engine.load(&driver).await?;
            return Ok((engine, Some(driver)));
        }

        let Some(path) = &self.catalog else {
            anyhow::bail!("either --url or --catalog is required");
        };

        let entries: Vec<SchemaEntry> =
            serde_json::from_str(&read(path)?).context("invalid catalog file")?;
        let engine = Engine::with_catalog(config, Catalog::from_entries(entries)?)?;
        tracing::debug!(path = %path.display(), "loaded catalog file");

        Ok((engine, None))
    }
}

pub(crate) fn config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::from_json(&read(path)?)?),
        None => Ok(Config::default()),
    }
}

pub(crate) fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
