use pretty_assertions::assert_eq;
use quarry_core::{
    descriptor::{BooleanOp, FieldSpec, Fields, LeafNode, OrderSpec, PageNumber, PredicateNode},
    QueryDescriptor,
};

#[test]
fn empty_document_uses_defaults() {
    let descriptor = QueryDescriptor::from_json("{}").unwrap();

    assert_eq!(descriptor, QueryDescriptor::default());
    assert_eq!(descriptor.fields, Fields::Default);
}

#[test]
fn full_document() {
    let descriptor = QueryDescriptor::from_json(
        r#"{
            "fields": [
                {"target": "full_name", "specification": "upper", "as": "name"},
                {"target": "email"}
            ],
            "whereClause": {"AND": [
                {"target": "full_name", "operator": "eq", "keyword": "Ann"},
                {"OR": [{"target": "quantity", "operator": "eq", "keyword": 5}]}
            ]},
            "groupByClause": [{"target": "status"}],
            "orderByClause": [{"target": "created_at", "order": "DESC"}],
            "page": 2
        }"#,
    )
    .unwrap();

    assert_eq!(
        descriptor.fields,
        Fields::List(vec![
            FieldSpec::new("full_name").transform("upper").alias("name"),
            FieldSpec::new("email"),
        ])
    );
    assert_eq!(
        descriptor.where_clause,
        Some(PredicateNode::and([
            PredicateNode::leaf("full_name", "eq", "Ann"),
            PredicateNode::or([PredicateNode::leaf("quantity", "eq", "5")]),
        ]))
    );
    assert_eq!(descriptor.group_by_clause.unwrap()[0].transform, "default");
    assert_eq!(
        descriptor.order_by_clause,
        Some(vec![OrderSpec::desc("created_at")])
    );
    assert_eq!(descriptor.page, Some(PageNumber::Integer(2)));
}

#[test]
fn incomplete_leaves_decode() {
    let descriptor =
        QueryDescriptor::from_json(r#"{"whereClause": {"target": "full_name"}}"#).unwrap();

    assert_eq!(
        descriptor.where_clause,
        Some(PredicateNode::Leaf(LeafNode {
            target: Some("full_name".to_string()),
            ..LeafNode::default()
        }))
    );
}

#[test]
fn boolean_operator_names() {
    assert_eq!(BooleanOp::And.to_string(), "AND");
    assert_eq!(BooleanOp::Or.to_string(), "OR");
}

#[test]
fn odd_pages_decode_for_later_rejection() {
    let descriptor = QueryDescriptor::from_json(r#"{"page": "3"}"#).unwrap();
    assert_eq!(
        descriptor.page,
        Some(PageNumber::Other(serde_json::json!("3")))
    );
}

#[test]
fn malformed_documents_are_invalid_descriptors() {
    for json in [
        "42",
        r#"{"fields": "all"}"#,
        r#"{"fields": [{"target": "id", "extra": 1}]}"#,
        r#"{"whereClause": {"AND": {}}}"#,
        r#"{"whereClause": {"target": "a", "operator": "eq", "keyword": true}}"#,
        r#"{"unknown": 1}"#,
    ] {
        let err = QueryDescriptor::from_json(json).unwrap_err();
        assert!(err.is_invalid_descriptor(), "{json}: {err}");
        assert_eq!(err.kind_name(), "InvalidDescriptor");
    }
}
