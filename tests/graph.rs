//! Tests for dependency extraction, cycle detection and evaluation order.
mod common;
use common::*;
use fieldlogic::prelude::*;
use serde_json::{Value, json};
use std::collections::HashSet;

#[test]
fn test_dependencies_in_rule_order_without_blanks() {
    let logic = ConditionalLogic::any(vec![
        rule("b", "==", json!(1)),
        rule("", "==", json!(1)),
        rule("a", "==", json!(1)),
        rule("   ", "empty", Value::Null),
        rule("b", "!=", json!(2)),
    ]);
    assert_eq!(get_dependencies(Some(&logic)), vec!["b", "a"]);
    assert!(get_dependencies(None).is_empty());
    assert!(get_dependencies(Some(&logic.disabled())).is_empty());
}

#[test]
fn test_two_field_cycle_is_detected() {
    let table = create_cyclic_table();
    assert!(has_circular_dependency("A", table.get("A"), &table));
    assert!(has_circular_dependency("B", table.get("B"), &table));
    assert_eq!(find_circular_fields(&table), vec!["A", "B"]);
}

#[test]
fn test_self_reference_is_a_cycle() {
    let mut table = LogicTable::new();
    table.insert("loop", ConditionalLogic::all(vec![rule("loop", "empty", Value::Null)]));
    assert!(has_circular_dependency("loop", table.get("loop"), &table));
}

#[test]
fn test_chain_without_back_edge_is_not_circular() {
    let table = create_chain_table();
    for name in ["A", "B", "C"] {
        assert!(!has_circular_dependency(name, table.get(name), &table), "field {}", name);
    }
    assert!(find_circular_fields(&table).is_empty());
}

#[test]
fn test_diamond_is_not_circular() {
    // Two sibling branches reach the same field. A path shared between the
    // branches would see "D" twice and report a false cycle.
    let mut table = LogicTable::new();
    table.insert(
        "A",
        ConditionalLogic::all(vec![rule("B", "!empty", Value::Null), rule("C", "!empty", Value::Null)]),
    );
    table.insert("B", ConditionalLogic::all(vec![rule("D", "!empty", Value::Null)]));
    table.insert("C", ConditionalLogic::all(vec![rule("D", "!empty", Value::Null)]));
    table.insert("D", ConditionalLogic::all(vec![rule("source", "!empty", Value::Null)]));

    assert!(!has_circular_dependency("A", table.get("A"), &table));
    assert!(find_circular_fields(&table).is_empty());
}

#[test]
fn test_cycle_in_second_branch_is_detected() {
    let mut table = LogicTable::new();
    table.insert(
        "A",
        ConditionalLogic::all(vec![rule("B", "!empty", Value::Null), rule("C", "!empty", Value::Null)]),
    );
    table.insert("B", ConditionalLogic::all(vec![rule("source", "!empty", Value::Null)]));
    table.insert("C", ConditionalLogic::all(vec![rule("A", "!empty", Value::Null)]));

    assert!(has_circular_dependency("A", table.get("A"), &table));
    assert!(!has_circular_dependency("B", table.get("B"), &table));
    assert!(has_circular_dependency("C", table.get("C"), &table));
    assert_eq!(find_circular_fields(&table), vec!["A", "C"]);
}

#[test]
fn test_deep_layered_fields_are_checked_once() {
    // Every field reaches the bottom layer through 2^depth distinct paths.
    let table = create_layered_table(30, false);
    assert_eq!(table.len(), 62);
    assert!(!has_circular_dependency("L0a", table.get("L0a"), &table));
    assert!(find_circular_fields(&table).is_empty());

    let resolver = VisibilityResolver::builder(
        table
            .iter()
            .map(|(name, logic)| conditional_field(name, logic.clone()))
            .collect(),
    )
    .build()
    .unwrap();
    assert!(!resolver.has_cycles());
    assert_eq!(resolver.evaluation_order().first().map(String::as_str), Some("L30a"));
}

#[test]
fn test_cycle_below_layers_flags_every_field() {
    let table = create_layered_table(30, true);
    let circular = find_circular_fields(&table);
    assert_eq!(circular.len(), table.len());
    assert_eq!(circular.first().map(String::as_str), Some("L0a"));
}

#[test]
fn test_disabled_logic_breaks_cycle() {
    let mut table = create_cyclic_table();
    let disabled = table.get("B").cloned().map(ConditionalLogic::disabled);
    if let Some(logic) = disabled {
        table.insert("B", logic);
    }
    assert!(!has_circular_dependency("A", table.get("A"), &table));
}

#[test]
fn test_evaluation_order_puts_dependencies_first() {
    let table = create_chain_table();
    assert_eq!(build_evaluation_order(&table), vec!["C", "B", "A"]);
}

#[test]
fn test_evaluation_order_is_a_permutation_even_with_cycles() {
    let mut table = create_cyclic_table();
    table.insert("C", ConditionalLogic::all(vec![rule("A", "==", json!(1))]));
    table.insert("D", ConditionalLogic::all(vec![rule("D", "==", json!(1))]));
    table.insert("E", ConditionalLogic::all(vec![rule("unknown", "==", json!(1))]));

    let order = build_evaluation_order(&table);
    assert_eq!(order.len(), table.len());
    let unique: HashSet<&String> = order.iter().collect();
    assert_eq!(unique.len(), order.len());
    for name in table.names() {
        assert!(order.iter().any(|n| n == name), "missing {}", name);
    }
    assert!(!order.iter().any(|n| n == "unknown"));

    let position = |name: &str| order.iter().position(|n| n == name);
    assert!(position("A") < position("C"));
}

#[test]
fn test_logic_table_keeps_first_position() {
    let fields = vec![
        conditional_field("x", ConditionalLogic::all(vec![rule("y", "empty", Value::Null)])),
        Field::new("y", FieldType::Number),
        conditional_field("z", ConditionalLogic::all(vec![])),
    ];
    let mut table = LogicTable::from_fields(&fields);
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["x", "z"]);

    table.insert("x", ConditionalLogic::any(vec![]));
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["x", "z"]);
    assert_eq!(table.get("x").map(|logic| logic.logic), Some(LogicMode::Or));
    assert!(!table.contains("y"));
}
