use crate::{Compiler, Config, ResolvedQuery};

use quarry_core::{descriptor::LeafNode, schema::Introspect, Catalog, Error, QueryDescriptor, Result};

use std::sync::{Arc, OnceLock};

/// Owns the configuration and the load-once schema catalog, and compiles
/// queries against them.
///
/// Cloning is cheap; clones share the catalog.
#[derive(Debug, Clone)]
pub struct Engine {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    compiler: Compiler,

    /// Installed by the first successful load, then read-only.
    catalog: OnceLock<Arc<Catalog>>,
}

impl Engine {
    pub fn new(config: Config) -> Result<Engine> {
        Ok(Engine::from_compiler(Compiler::new(config)?))
    }

    pub fn from_compiler(compiler: Compiler) -> Engine {
        Engine {
            shared: Arc::new(Shared {
                compiler,
                catalog: OnceLock::new(),
            }),
        }
    }

    /// An engine whose catalog is already known, e.g. read from a file.
    pub fn with_catalog(config: Config, catalog: Catalog) -> Result<Engine> {
        let engine = Engine::new(config)?;
        // A fresh engine has no catalog yet.
        let _ = engine.shared.catalog.set(Arc::new(catalog));
        Ok(engine)
    }

    pub fn config(&self) -> &Config {
        self.shared.compiler.config()
    }

    pub fn compiler(&self) -> &Compiler {
        &self.shared.compiler
    }

    /// Loads the schema catalog through `introspect`, bounded by the
    /// configured timeout.
    ///
    /// On failure the catalog stays unavailable and the call may be
    /// retried. Once a catalog is installed further calls return it without
    /// introspecting again.
    pub async fn load(&self, introspect: &dyn Introspect) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.shared.catalog.get() {
            return Ok(catalog.clone());
        }

        let config = self.config();
        let timeout = config.introspection_timeout_duration();

        let entries = match tokio::time::timeout(
            timeout,
            introspect.introspect(&config.allowed_tables, &config.denied_columns),
        )
        .await
        {
            Ok(Ok(entries)) => entries,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "schema introspection failed");
                return Err(err.context(Error::schema_unavailable("introspection failed")));
            }
            Err(_) => {
                tracing::warn!(?timeout, "schema introspection timed out");
                return Err(Error::schema_unavailable(format!(
                    "introspection timed out after {timeout:?}"
                )));
            }
        };

        let catalog = Catalog::from_entries(entries)
            .map_err(|err| err.context(Error::schema_unavailable("introspected schema rejected")))?;

        tracing::info!(
            tables = catalog.tables().len(),
            columns = catalog.len(),
            "schema catalog loaded"
        );

        Ok(self
            .shared
            .catalog
            .get_or_init(|| Arc::new(catalog))
            .clone())
    }

    /// The loaded catalog, or `SchemaUnavailable` before a successful load.
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        self.shared
            .catalog
            .get()
            .cloned()
            .ok_or_else(|| Error::schema_unavailable("catalog has not been loaded"))
    }

    pub fn is_loaded(&self) -> bool {
        self.shared.catalog.get().is_some()
    }

    pub fn compile(&self, descriptor: &QueryDescriptor, table: &str, owner: &str) -> Result<ResolvedQuery> {
        let catalog = self.catalog()?;
        self.shared.compiler.compile(&catalog, descriptor, table, owner)
    }

    /// Decodes and compiles a JSON descriptor.
    pub fn compile_json(&self, json: &str, table: &str, owner: &str) -> Result<ResolvedQuery> {
        let catalog = self.catalog()?;
        let descriptor = QueryDescriptor::from_json(json)?;
        self.shared.compiler.compile(&catalog, &descriptor, table, owner)
    }

    pub fn search(
        &self,
        table: &str,
        column: &str,
        keyword: &str,
        page: i64,
        owner: &str,
    ) -> Result<ResolvedQuery> {
        let catalog = self.catalog()?;
        self.shared
            .compiler
            .search(&catalog, table, column, keyword, page, owner)
    }

    pub fn compile_threshold(
        &self,
        descriptor: &QueryDescriptor,
        table: &str,
        owner: &str,
        conditions: &[LeafNode],
    ) -> Result<ResolvedQuery> {
        let catalog = self.catalog()?;
        self.shared
            .compiler
            .compile_threshold(&catalog, descriptor, table, owner, conditions)
    }
}
