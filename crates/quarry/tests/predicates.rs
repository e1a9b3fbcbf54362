mod support;

use pretty_assertions::assert_eq;
use quarry::{PredicateNode, QueryDescriptor, Result, ResolvedQuery, Value};
use rust_decimal::Decimal;
use support::OWNER;

fn search(table: &str, predicate: PredicateNode) -> Result<ResolvedQuery> {
    support::compiler().compile(
        &support::catalog(),
        &QueryDescriptor::default().filter(predicate),
        table,
        OWNER,
    )
}

fn leaf(target: &str, operator: &str, keyword: &str) -> PredicateNode {
    PredicateNode::leaf(target, operator, keyword)
}

fn where_sql(query: &ResolvedQuery) -> &str {
    query.where_sql.as_deref().unwrap()
}

#[test]
fn text_columns_match_by_containment() {
    let query = search("clients", leaf("full_name", "eq", "Ann")).unwrap();

    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND "base"."full_name" ILIKE $2)"#
    );
    assert_eq!(query.parameters, [Value::from(OWNER), Value::from("%Ann%")]);
}

#[test]
fn ne_negates_the_match() {
    let query = search("clients", leaf("full_name", "ne", "Ann")).unwrap();

    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND NOT ("base"."full_name" ILIKE $2))"#
    );
}

#[test]
fn wildcards_in_keywords_are_escaped() {
    let query = search("transactions", leaf("reference", "eq", "50%_off")).unwrap();

    assert_eq!(query.parameters[1], Value::from("%50\\%\\_off%"));
}

#[test]
fn enum_and_uuid_columns_are_cast_to_text() {
    let query = search("clients", leaf("status", "eq", "active")).unwrap();
    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND CAST("base"."status" AS TEXT) ILIKE $2)"#
    );

    let query = search("clients", leaf("id", "eq", "4f0c")).unwrap();
    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND CAST("base"."id" AS TEXT) ILIKE $2)"#
    );
}

#[test]
fn unmapped_uuid_arrays_match_their_text_form() {
    let query = search("transactions", leaf("attachments", "eq", "4f0c")).unwrap();

    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND ARRAY_TO_STRING("base"."attachments", ',') ILIKE $2)"#
    );
}

#[test]
fn single_relationships_search_the_display_column() {
    let query = search("transactions", leaf("company", "eq", "Acme")).unwrap();

    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND "base"."company" IN (SELECT "id" FROM "companies" WHERE ("owner_id" = $2 AND "name" ILIKE $3)))"#
    );
    assert_eq!(
        query.parameters,
        [Value::from(OWNER), Value::from(OWNER), Value::from("%Acme%")]
    );
}

#[test]
fn array_relationships_search_any_referenced_row() {
    let query = search("products", leaf("materials", "eq", "steel")).unwrap();

    assert_eq!(
        where_sql(&query),
        concat!(
            r#"WHERE ("base"."owner_id" = $1 AND EXISTS (SELECT 1 FROM "materials" AS "mas" "#,
            r#"WHERE ("mas"."id" = ANY("base"."materials") AND "mas"."name" ILIKE $2 AND "mas"."owner_id" = $3)))"#,
        )
    );
    assert_eq!(
        query.parameters,
        [Value::from(OWNER), Value::from("%steel%"), Value::from(OWNER)]
    );
}

#[test]
fn quantity_with_unit_matches_the_unit_column() {
    let query = search("materials", leaf("quantity", "eq", "5kg")).unwrap();

    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND ("base"."quantity" = $2 AND "base"."quantity_unit" = $3))"#
    );
    assert_eq!(
        query.parameters,
        [
            Value::from(OWNER),
            Value::from(Decimal::from(5)),
            Value::from("kg")
        ]
    );
}

#[test]
fn bare_quantity_matches_the_value_only() {
    let query = search("materials", leaf("quantity", "eq", "5")).unwrap();

    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND "base"."quantity" = $2)"#
    );
}

#[test]
fn dimensions_match_either_unit_convention() {
    let query = search("products", leaf("width", "eq", "10cm")).unwrap();

    assert_eq!(
        where_sql(&query),
        concat!(
            r#"WHERE ("base"."owner_id" = $1 AND (("base"."width" = $2 AND ("base"."width_unit" = $3 OR "base"."dimension_unit" = $4)) "#,
            r#"OR CONCAT("base"."width", "base"."width_unit") = $5 "#,
            r#"OR CONCAT("base"."width", "base"."dimension_unit") = $6))"#,
        )
    );
    assert_eq!(query.parameters[5], Value::from("10cm"));
}

#[test]
fn dimensions_skip_unit_columns_the_table_lacks() {
    let query = search("products", leaf("height", "eq", "10cm")).unwrap();

    assert_eq!(
        where_sql(&query),
        concat!(
            r#"WHERE ("base"."owner_id" = $1 AND (("base"."height" = $2 AND "base"."dimension_unit" = $3) "#,
            r#"OR CONCAT("base"."height", "base"."dimension_unit") = $4))"#,
        )
    );
}

#[test]
fn units_are_rejected_on_unpaired_columns() {
    let err = search("products", leaf("price", "eq", "5kg")).unwrap_err();
    assert!(err.is_invalid_predicate());
}

#[test]
fn integer_columns_bind_integers_and_reject_fractions() {
    let query = search("products", leaf("stock", "eq", "3")).unwrap();
    assert_eq!(query.parameters[1], Value::Integer(3));

    let err = search("products", leaf("stock", "eq", "3.5")).unwrap_err();
    assert!(err.is_invalid_predicate());
}

#[test]
fn numbers_must_be_unsigned() {
    for keyword in ["-5", "five", "5 kg 2"] {
        let err = search("materials", leaf("quantity", "eq", keyword)).unwrap_err();
        assert!(err.is_invalid_predicate(), "{keyword}");
    }
}

#[test]
fn numbers_must_be_positive() {
    for keyword in ["0", "0kg", "0.0", "0 kg", "00"] {
        let err = search("materials", leaf("quantity", "eq", keyword)).unwrap_err();
        assert!(err.is_invalid_predicate(), "{keyword}");
        assert_eq!(
            err.to_string(),
            format!("invalid predicate: keyword {keyword:?} is not a positive number")
        );
    }

    let err = search("products", leaf("stock", "eq", "0")).unwrap_err();
    assert!(err.is_invalid_predicate());

    assert!(search("materials", leaf("quantity", "eq", "0.5kg")).is_ok());
}

#[test]
fn timestamps_need_an_offset_and_must_not_be_in_the_future() {
    let query = search(
        "transactions",
        leaf("created_at", "eq", "2024-12-31T10:00:00+01:00"),
    )
    .unwrap();

    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND "base"."created_at" = $2)"#
    );
    assert_eq!(
        query.parameters[1],
        Value::Timestamp("2024-12-31T09:00:00Z".parse().unwrap())
    );

    for keyword in ["2024-12-31T10:00:00", "2025-06-01T00:00:00Z", "last week"] {
        let err = search("transactions", leaf("created_at", "eq", keyword)).unwrap_err();
        assert!(err.is_invalid_predicate(), "{keyword}");
    }
}

#[test]
fn boolean_nodes_nest() {
    let query = search(
        "clients",
        PredicateNode::or([
            leaf("full_name", "eq", "Ann"),
            PredicateNode::and([leaf("email", "eq", "example.com"), leaf("status", "ne", "archived")]),
        ]),
    )
    .unwrap();

    assert_eq!(
        where_sql(&query),
        r#"WHERE ("base"."owner_id" = $1 AND ("base"."full_name" ILIKE $2 OR ("base"."email" ILIKE $3 AND NOT (CAST("base"."status" AS TEXT) ILIKE $4))))"#
    );
}

#[test]
fn one_invalid_leaf_rejects_the_whole_tree() {
    let err = search(
        "clients",
        PredicateNode::and([leaf("full_name", "eq", "Ann"), leaf("full_name", "gt", "Ann")]),
    )
    .unwrap_err();

    assert!(err.is_invalid_predicate());
    assert_eq!(err.kind_name(), "InvalidPredicate");
}

#[test]
fn empty_boolean_nodes_are_rejected() {
    let err = search("clients", PredicateNode::and(Vec::<PredicateNode>::new())).unwrap_err();
    assert!(err.is_invalid_predicate());
}

#[test]
fn incomplete_leaves_are_rejected() {
    for json in [
        r#"{"whereClause": {"target": "full_name", "operator": "eq"}}"#,
        r#"{"whereClause": {"operator": "eq", "keyword": "Ann"}}"#,
        r#"{"whereClause": {"target": "full_name", "operator": "", "keyword": "Ann"}}"#,
    ] {
        let descriptor = QueryDescriptor::from_json(json).unwrap();
        let err = support::compiler()
            .compile(&support::catalog(), &descriptor, "clients", OWNER)
            .unwrap_err();
        assert!(err.is_invalid_predicate(), "{json}");
    }
}

#[test]
fn unknown_targets_and_operators_are_rejected() {
    for (target, operator, keyword) in [
        ("nickname", "eq", "Ann"),
        ("full name", "eq", "Ann"),
        ("owner_id", "eq", "x"),
        ("full_name", "like", "Ann"),
        ("full_name", "eq;", "Ann"),
        ("full_name", "eq", "<script>"),
        ("full_name", "eq", "1=1"),
    ] {
        let err = search("clients", leaf(target, operator, keyword)).unwrap_err();
        assert!(err.is_invalid_predicate(), "{target} {operator} {keyword}");
    }
}

#[test]
fn numeric_keywords_may_arrive_as_json_numbers() {
    let descriptor = QueryDescriptor::from_json(
        r#"{"whereClause": {"target": "quantity", "operator": "eq", "keyword": 5}}"#,
    )
    .unwrap();

    let query = support::compiler()
        .compile(&support::catalog(), &descriptor, "materials", OWNER)
        .unwrap();

    assert_eq!(query.parameters[1], Value::from(Decimal::from(5)));
}
