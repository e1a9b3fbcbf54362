mod support;

use quarry::{Config, Engine, Introspect, QueryDescriptor, Result, SchemaEntry, TypeTag};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};
use support::OWNER;

/// Answers introspection from a script of canned results.
#[derive(Default)]
struct FakeIntrospect {
    results: Mutex<Vec<Result<Vec<SchemaEntry>>>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    seen: Mutex<Option<(Vec<String>, Vec<String>)>>,
}

impl FakeIntrospect {
    fn returning(results: Vec<Result<Vec<SchemaEntry>>>) -> FakeIntrospect {
        FakeIntrospect {
            results: Mutex::new(results),
            ..FakeIntrospect::default()
        }
    }
}

#[async_trait::async_trait]
impl Introspect for FakeIntrospect {
    async fn introspect(
        &self,
        allowed_tables: &[String],
        denied_columns: &[String],
    ) -> Result<Vec<SchemaEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.seen.lock().unwrap() = Some((allowed_tables.to_vec(), denied_columns.to_vec()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.results.lock().unwrap().remove(0)
    }
}

fn connection_refused() -> quarry::Error {
    quarry::Error::driver(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

#[tokio::test]
async fn compiling_before_load_fails_closed() {
    let engine = Engine::new(Config::default()).unwrap();

    let err = engine
        .compile(&QueryDescriptor::default(), "clients", OWNER)
        .unwrap_err();

    assert!(err.is_schema_unavailable());
    assert_eq!(err.kind_name(), "SchemaUnavailable");
    assert!(!engine.is_loaded());
}

#[tokio::test]
async fn load_installs_the_catalog_once() {
    let engine = Engine::new(Config::default()).unwrap();
    let introspect = FakeIntrospect::returning(vec![Ok(support::entries())]);

    let first = engine.load(&introspect).await.unwrap();
    let second = engine.load(&introspect).await.unwrap();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(introspect.calls.load(Ordering::SeqCst), 1);
    assert!(engine.catalog().unwrap().exists("transactions"));

    let query = engine
        .compile(&QueryDescriptor::default(), "clients", OWNER)
        .unwrap();
    assert!(query.count.is_some());
}

#[tokio::test]
async fn introspection_is_limited_to_the_configured_tables() {
    let config = Config::default()
        .allowed_tables(["clients"])
        .denied_columns(["owner_id", "ssn"]);
    let engine = Engine::new(config).unwrap();
    let introspect = FakeIntrospect::returning(vec![Ok(vec![SchemaEntry::new(
        "clients",
        "id",
        TypeTag::Uuid,
    )])]);

    engine.load(&introspect).await.unwrap();

    let (tables, columns) = introspect.seen.lock().unwrap().clone().unwrap();
    assert_eq!(tables, ["clients"]);
    assert_eq!(columns, ["owner_id", "ssn"]);
}

#[tokio::test]
async fn failed_load_can_be_retried() {
    let engine = Engine::new(Config::default()).unwrap();
    let introspect =
        FakeIntrospect::returning(vec![Err(connection_refused()), Ok(support::entries())]);

    let err = engine.load(&introspect).await.unwrap_err();
    assert!(err.is_schema_unavailable());
    assert_eq!(
        err.to_string(),
        "schema catalog unavailable: introspection failed: connection refused"
    );
    assert!(engine.catalog().unwrap_err().is_schema_unavailable());

    engine.load(&introspect).await.unwrap();
    assert!(engine.is_loaded());
}

#[tokio::test]
async fn slow_introspection_times_out() {
    let config = Config::default().introspection_timeout(Duration::from_millis(20));
    let engine = Engine::new(config).unwrap();
    let introspect = FakeIntrospect {
        results: Mutex::new(vec![Ok(support::entries())]),
        delay: Some(Duration::from_secs(5)),
        ..FakeIntrospect::default()
    };

    let err = engine.load(&introspect).await.unwrap_err();

    assert!(err.is_schema_unavailable());
    assert!(!engine.is_loaded());
}

#[tokio::test]
async fn duplicate_entries_leave_the_catalog_unavailable() {
    let engine = Engine::new(Config::default()).unwrap();
    let introspect = FakeIntrospect::returning(vec![Ok(vec![
        SchemaEntry::new("clients", "id", TypeTag::Uuid),
        SchemaEntry::new("clients", "id", TypeTag::Text),
    ])]);

    let err = engine.load(&introspect).await.unwrap_err();

    assert!(err.is_schema_unavailable());
    assert!(err.to_string().contains("duplicate column `id` on table `clients`"));
}

#[test]
fn compile_json_rejects_malformed_descriptors() {
    let engine = Engine::with_catalog(Config::default(), support::catalog()).unwrap();

    for json in [
        "not json",
        r#"{"fields": "everything"}"#,
        r#"{"wherClause": null}"#,
        r#"{"whereClause": {"AND": [], "OR": []}}"#,
    ] {
        let err = engine.compile_json(json, "clients", OWNER).unwrap_err();
        assert!(err.is_invalid_descriptor(), "{json}: {err}");
    }
}

#[test]
fn compile_json_compiles_wire_descriptors() {
    let engine = Engine::with_catalog(Config::default(), support::catalog()).unwrap();

    let query = engine
        .compile_json(
            r#"{"whereClause": {"target": "company", "operator": "eq", "keyword": "Acme"}, "page": 1}"#,
            "transactions",
            OWNER,
        )
        .unwrap();

    assert!(query.where_sql.unwrap().contains(r#"IN (SELECT "id" FROM "companies""#));
}
