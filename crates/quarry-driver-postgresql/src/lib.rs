mod r#type;
pub use r#type::type_tag;

mod value;
pub(crate) use value::Value;

use postgres::{tls::MakeTlsConnect, types::ToSql, Socket};
use quarry::{CompiledStatement, ResolvedQuery};
use quarry_core::{
    schema::{Introspect, SchemaEntry},
    Error, Result,
};
use serde_json::{Map, Value as Json};
use tokio_postgres::{Client, Config};
use url::Url;

const INTROSPECT: &str = "\
SELECT table_name::text, column_name::text, data_type::text, udt_name::text \
FROM information_schema.columns \
WHERE table_schema = current_schema() \
AND table_name::text = ANY($1::text[]) \
AND NOT (column_name::text = ANY($2::text[])) \
ORDER BY table_name, ordinal_position";

/// A row, keyed by output column name.
pub type Row = Map<String, Json>;

#[derive(Debug)]
pub struct PostgreSQL {
    /// The PostgreSQL client.
    client: Client,
}

/// One page of rows and, for a first page, the total row count.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub rows: Vec<Row>,
    pub total: Option<i64>,
}

impl PostgreSQL {
    /// Wraps an initialized connection.
    pub fn new(connection: Client) -> Self {
        Self { client: connection }
    }

    /// Connects to a PostgreSQL database using a connection string.
    ///
    /// See [`postgres::Client::connect`] for more information.
    pub async fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;

        if url.scheme() != "postgresql" && url.scheme() != "postgres" {
            return Err(anyhow::anyhow!(
                "connection URL does not have a `postgresql` scheme; url={}",
                url
            )
            .into());
        }

        let host = url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("missing host in connection URL; url={}", url))?;

        let dbname = url.path().trim_start_matches('/');
        if dbname.is_empty() {
            return Err(anyhow::anyhow!(
                "no database specified - missing path in connection URL; url={}",
                url
            )
            .into());
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(dbname);

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Self::connect_with_config(config, tokio_postgres::NoTls).await
    }

    /// Connects to a PostgreSQL database using a [`postgres::Config`].
    ///
    /// See [`postgres::Client::configure`] for more information.
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(Error::driver)?;

        tokio::spawn(async move {
            if let Err(err) = connection.await {
                tracing::error!(%err, "connection error");
            }
        });

        Ok(Self::new(client))
    }

    /// Runs a compiled statement, returning each row as a JSON object.
    ///
    /// Rows are encoded server side with `row_to_json`, so every column type
    /// the database can render as JSON comes back without a local decoder.
    pub async fn query(&self, statement: &CompiledStatement) -> Result<Vec<Row>> {
        let sql = format!("SELECT row_to_json(\"row\") FROM ({}) AS \"row\"", statement.text);
        tracing::debug!(sql = %statement.text, params = statement.parameters.len(), "query");

        let params = bind(&statement.parameters);
        let rows = self
            .client
            .query(&sql, &args(&params))
            .await
            .map_err(Error::driver)?;

        rows.iter()
            .map(|row| {
                match row.try_get::<_, Json>(0).map_err(Error::driver)? {
                    Json::Object(map) => Ok(map),
                    other => Err(quarry_core::err!("row did not encode as an object; row={other}")),
                }
            })
            .collect()
    }

    /// Runs the count statement of a first page.
    pub async fn count(&self, statement: &CompiledStatement) -> Result<i64> {
        tracing::debug!(sql = %statement.text, "count");

        let params = bind(&statement.parameters);
        let row = self
            .client
            .query_one(&statement.text, &args(&params))
            .await
            .map_err(Error::driver)?;

        row.try_get::<_, i64>(0).map_err(Error::driver)
    }

    /// Runs a resolved query along with its count statement, if any.
    pub async fn search(&self, query: &ResolvedQuery) -> Result<SearchResults> {
        let rows = self.query(&query.statement()).await?;

        let total = match &query.count {
            Some(count) => Some(self.count(count).await?),
            None => None,
        };

        Ok(SearchResults { rows, total })
    }
}

impl From<Client> for PostgreSQL {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

#[quarry_core::async_trait]
impl Introspect for PostgreSQL {
    async fn introspect(
        &self,
        allowed_tables: &[String],
        denied_columns: &[String],
    ) -> Result<Vec<SchemaEntry>> {
        let rows = self
            .client
            .query(INTROSPECT, &[&allowed_tables, &denied_columns])
            .await
            .map_err(Error::driver)?;

        let mut entries = Vec::with_capacity(rows.len());

        for row in &rows {
            let table: String = row.try_get(0).map_err(Error::driver)?;
            let column: String = row.try_get(1).map_err(Error::driver)?;
            let data_type: String = row.try_get(2).map_err(Error::driver)?;
            let udt_name: String = row.try_get(3).map_err(Error::driver)?;

            match type_tag(&data_type, &udt_name) {
                Some(ty) => entries.push(SchemaEntry::new(table, column, ty)),
                None => tracing::debug!(%table, %column, %data_type, "skipping column of unsupported type"),
            }
        }

        tracing::debug!(columns = entries.len(), "introspected schema");
        Ok(entries)
    }
}

fn bind(parameters: &[quarry_core::Value]) -> Vec<Value> {
    parameters.iter().cloned().map(Value::from).collect()
}

fn args(params: &[Value]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|param| param as &(dyn ToSql + Sync))
        .collect()
}
