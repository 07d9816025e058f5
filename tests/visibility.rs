//! Tests for resolving the visibility of a whole field set.
mod common;
use common::*;
use fieldlogic::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_banner_scenario() {
    let fields = create_banner_fields();
    let table = LogicTable::from_fields(&fields);

    let hidden = evaluate_all(&table, &json!({ "show_banner": false }));
    assert_eq!(hidden.len(), 1);
    assert_eq!(hidden.get("banner_text"), Some(&false));

    let shown = evaluate_all(&table, &json!({ "show_banner": true }));
    assert_eq!(shown.get("banner_text"), Some(&true));
    assert!(!shown.contains_key("show_banner"));
}

#[test]
fn test_resolver_matches_evaluate_all() {
    let fields = create_banner_fields();
    let resolver = VisibilityResolver::builder(fields.clone()).build().unwrap();
    let values = json!({ "show_banner": "true" });

    let report = resolver.resolve(&values).unwrap();
    assert_eq!(report.visibility, evaluate_all(&LogicTable::from_fields(&fields), &values));
    assert!(report.is_visible("banner_text"));
    assert!(report.is_visible("show_banner"));
    assert!(report.is_visible("no_such_field"));
    assert!(!report.has_cycles());
    assert_eq!(report.evaluation_order, vec!["banner_text"]);
}

#[test]
fn test_hidden_field_value_still_counts() {
    // `details` is hidden, but `summary` reads its value regardless.
    let fields = vec![
        Field::new("enabled", FieldType::Boolean),
        conditional_field("details", ConditionalLogic::all(vec![rule("enabled", "==", json!(true))])),
        conditional_field("summary", ConditionalLogic::all(vec![rule("details", "!empty", Value::Null)])),
    ];
    let resolver = VisibilityResolver::builder(fields).build().unwrap();
    let report = resolver
        .resolve(&json!({ "enabled": false, "details": "stale text" }))
        .unwrap();

    assert!(!report.is_visible("details"));
    assert!(report.is_visible("summary"));
    assert_eq!(report.evaluation_order, vec!["details", "summary"]);
}

#[test]
fn test_cycles_are_reported_under_warn_policy() {
    let fields = vec![
        conditional_field("A", ConditionalLogic::all(vec![rule("B", "==", json!("on"))])),
        conditional_field("B", ConditionalLogic::all(vec![rule("A", "==", json!("on"))])),
        conditional_field("C", ConditionalLogic::all(vec![rule("x", "==", json!("on"))])),
    ];
    let resolver = VisibilityResolver::builder(fields).build().unwrap();
    assert_eq!(resolver.cycle_policy(), CyclePolicy::Warn);
    assert!(resolver.has_cycles());
    assert_eq!(resolver.circular_fields(), ["A", "B"]);

    let report = resolver.resolve(&json!({ "A": "on", "B": "off", "x": "on" })).unwrap();
    assert!(report.has_cycles());
    assert_eq!(report.visibility.get("A"), Some(&false));
    assert_eq!(report.visibility.get("B"), Some(&true));
    assert_eq!(report.visibility.get("C"), Some(&true));
}

#[test]
fn test_cycles_are_rejected_under_reject_policy() {
    let fields = vec![
        conditional_field("A", ConditionalLogic::all(vec![rule("B", "empty", Value::Null)])),
        conditional_field("B", ConditionalLogic::all(vec![rule("A", "empty", Value::Null)])),
    ];
    let resolver = VisibilityResolver::builder(fields)
        .with_cycle_policy(CyclePolicy::Reject)
        .build()
        .unwrap();

    match resolver.resolve(&json!({})) {
        Err(FieldLogicError::CircularDependency { fields }) => {
            assert_eq!(fields, vec!["A", "B"]);
        }
        other => panic!("expected a circular dependency error, got {:?}", other),
    }
}

#[test]
fn test_duplicate_field_names_are_rejected() {
    let fields = vec![
        Field::new("title", FieldType::Text),
        Field::new("title", FieldType::Textarea),
    ];
    match VisibilityResolver::builder(fields).build() {
        Err(FieldLogicError::DuplicateField(name)) => assert_eq!(name, "title"),
        other => panic!("expected a duplicate field error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_operator_alias_rewrites_unknown_operators() {
    let fields = vec![conditional_field(
        "price",
        ConditionalLogic::all(vec![rule("role", "is", json!("supplier"))]),
    )];

    let plain = VisibilityResolver::builder(fields.clone()).build().unwrap();
    let values = json!({ "role": "supplier" });
    assert!(!plain.resolve(&values).unwrap().is_visible("price"));

    let aliased = VisibilityResolver::builder(fields)
        .with_operator_alias("is", Operator::Equals)
        .build()
        .unwrap();
    assert!(aliased.resolve(&values).unwrap().is_visible("price"));
    let rule_operator = aliased
        .logic_table()
        .get("price")
        .map(|logic| logic.rules[0].operator.clone());
    assert_eq!(rule_operator, Some(Operator::Equals));
}

#[test]
fn test_report_serializes_camel_case() {
    let resolver = VisibilityResolver::builder(create_banner_fields()).build().unwrap();
    let report = resolver.resolve(&json!({ "show_banner": true })).unwrap();
    let serialized = serde_json::to_value(&report).unwrap();
    assert_eq!(
        serialized,
        json!({
            "visibility": { "banner_text": true },
            "evaluationOrder": ["banner_text"],
            "circularFields": []
        })
    );
}

#[test]
fn test_builder_debug_shows_configuration() {
    let builder = VisibilityResolver::builder(create_banner_fields())
        .with_cycle_policy(CyclePolicy::Reject);
    let debug = format!("{:?}", builder);
    assert!(debug.contains("Reject"));
    assert!(debug.contains("banner_text"));
}
