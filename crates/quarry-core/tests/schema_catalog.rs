use pretty_assertions::assert_eq;
use quarry_core::schema::{Catalog, SchemaEntry, TypeTag};

fn entries() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry::new("clients", "id", TypeTag::Uuid),
        SchemaEntry::new("clients", "full_name", TypeTag::Text),
        SchemaEntry::new("materials", "quantity", TypeTag::Numeric),
        SchemaEntry::new("clients", "created_at", TypeTag::Timestamp),
    ]
}

#[test]
fn lookups() {
    let catalog = Catalog::from_entries(entries()).unwrap();

    assert!(catalog.exists("clients"));
    assert!(!catalog.exists("invoices"));
    assert_eq!(catalog.type_of("clients", "full_name"), Some(TypeTag::Text));
    assert_eq!(catalog.type_of("clients", "quantity"), None);
    assert_eq!(catalog.type_of("invoices", "id"), None);
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.tables().len(), 2);
}

#[test]
fn columns_keep_load_order() {
    let catalog = Catalog::from_entries(entries()).unwrap();

    assert_eq!(
        catalog.columns_of("clients"),
        [
            SchemaEntry::new("clients", "id", TypeTag::Uuid),
            SchemaEntry::new("clients", "full_name", TypeTag::Text),
            SchemaEntry::new("clients", "created_at", TypeTag::Timestamp),
        ]
    );
    assert!(catalog.columns_of("invoices").is_empty());
}

#[test]
fn duplicate_columns_are_rejected() {
    let mut entries = entries();
    entries.push(SchemaEntry::new("clients", "full_name", TypeTag::Text));

    let err = Catalog::from_entries(entries).unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: duplicate column `full_name` on table `clients`"
    );
}

#[test]
fn entries_decode_from_json() {
    let entries: Vec<SchemaEntry> = serde_json::from_str(
        r#"[
            {"table": "products", "column": "materials", "type": "uuid_array"},
            {"table": "products", "column": "stock", "type": "integer"}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::from_entries(entries).unwrap();
    assert_eq!(catalog.type_of("products", "materials"), Some(TypeTag::UuidArray));
    assert_eq!(catalog.entries().len(), 2);
}

#[test]
fn textual_types() {
    for ty in [TypeTag::Text, TypeTag::Uuid, TypeTag::UuidArray, TypeTag::Enum] {
        assert!(ty.is_textual(), "{ty}");
        assert!(!ty.is_numeric(), "{ty}");
    }

    assert!(TypeTag::Integer.is_numeric());
    assert!(!TypeTag::Timestamp.is_textual());
}
