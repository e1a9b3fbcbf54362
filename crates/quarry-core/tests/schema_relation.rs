use quarry_core::schema::{projection, Cardinality, ForeignKeyResolver, UnitPairing};

#[test]
fn relationship_columns_resolve_to_their_display_column() {
    let relations = ForeignKeyResolver::standard();

    let company = relations.resolve("company").unwrap();
    assert_eq!(company.target_table, "companies");
    assert_eq!(company.display_column, "name");
    assert_eq!(company.cardinality, Cardinality::Single);

    let products = relations.resolve("products").unwrap();
    assert!(products.is_array());
    assert_eq!(products.display_column, "name");

    assert!(relations.resolve("full_name").is_none());
}

#[test]
fn join_aliases_are_unique() {
    let mappings = ForeignKeyResolver::standard().mappings();

    for (i, a) in mappings.iter().enumerate() {
        for b in &mappings[i + 1..] {
            assert_ne!(a.join_alias, b.join_alias);
        }
    }
}

#[test]
fn unit_pairings() {
    let quantity = UnitPairing::lookup("quantity").unwrap();
    assert!(!quantity.is_dimensional());
    assert_eq!(quantity.unit_columns(), ["quantity_unit"]);

    let width = UnitPairing::lookup("width").unwrap();
    assert!(width.is_dimensional());
    assert_eq!(width.unit_columns(), ["width_unit", "dimension_unit"]);

    assert!(UnitPairing::lookup("price").is_none());
}

#[test]
fn curated_projections() {
    assert_eq!(
        projection::lookup("companies"),
        Some(&["id", "name", "email", "phone", "created_at"][..])
    );
    assert!(projection::lookup("invoices").is_none());
}
