//! Common test utilities for building field sets, values and contexts.
use fieldlogic::prelude::*;
use serde_json::{Value, json};

/// A single rule with a JSON comparison value.
#[allow(dead_code)]
pub fn rule(field: &str, operator: &str, value: Value) -> ConditionalRule {
    ConditionalRule::new(field, Operator::parse(operator), value)
}

/// A field whose visibility depends on `logic`.
#[allow(dead_code)]
pub fn conditional_field(name: &str, logic: ConditionalLogic) -> Field {
    Field::new(name, FieldType::Text).with_logic(logic)
}

/// The banner scenario: `banner_text` is shown when `show_banner == true`.
#[allow(dead_code)]
pub fn create_banner_fields() -> Vec<Field> {
    vec![
        Field::new("show_banner", FieldType::Boolean),
        Field::new("banner_text", FieldType::Text).with_logic(ConditionalLogic::all(vec![rule(
            "show_banner",
            "==",
            json!(true),
        )])),
    ]
}

/// A depends on B and B depends on A.
#[allow(dead_code)]
pub fn create_cyclic_table() -> LogicTable {
    let mut table = LogicTable::new();
    table.insert("A", ConditionalLogic::all(vec![rule("B", "!empty", Value::Null)]));
    table.insert("B", ConditionalLogic::all(vec![rule("A", "!empty", Value::Null)]));
    table
}

/// A depends on B, B depends on C, C has no logic of its own beyond a plain value.
#[allow(dead_code)]
pub fn create_chain_table() -> LogicTable {
    let mut table = LogicTable::new();
    table.insert("A", ConditionalLogic::all(vec![rule("B", "==", json!("yes"))]));
    table.insert("B", ConditionalLogic::all(vec![rule("C", "==", json!("yes"))]));
    table.insert("C", ConditionalLogic::all(vec![rule("source", "!empty", Value::Null)]));
    table
}

/// A product editing screen for a supplier.
#[allow(dead_code)]
pub fn create_product_context() -> LocationContext {
    LocationContext::new()
        .with_post_type("ds_product")
        .with_post_status("draft")
        .with_template("templates/product.php")
        .with_categories(["news", "tech"])
        .with_terms("product_tag", ["sale", "Featured"])
        .with_user_role("supplier")
        .with_user_roles(["editor"])
        .with_user_id("42")
}

#[allow(dead_code)]
pub fn location(param: &str, operator: &str, value: &str) -> FieldLocation {
    FieldLocation::new(param, operator, value)
}

/// `depth` layers of two fields each, every field depending on both fields of
/// the layer below. The bottom pair depends on each other when `cyclic_bottom`.
#[allow(dead_code)]
pub fn create_layered_table(depth: usize, cyclic_bottom: bool) -> LogicTable {
    let mut table = LogicTable::new();
    for layer in 0..depth {
        let below = [format!("L{}a", layer + 1), format!("L{}b", layer + 1)];
        for side in ["a", "b"] {
            let rules = below.iter().map(|name| rule(name, "!empty", Value::Null)).collect();
            table.insert(format!("L{}{}", layer, side), ConditionalLogic::any(rules));
        }
    }

    let (a, b) = (format!("L{}a", depth), format!("L{}b", depth));
    let (a_dep, b_dep) = if cyclic_bottom {
        (b.clone(), a.clone())
    } else {
        ("source".to_string(), "source".to_string())
    };
    table.insert(a, ConditionalLogic::all(vec![rule(&a_dep, "!empty", Value::Null)]));
    table.insert(b, ConditionalLogic::all(vec![rule(&b_dep, "!empty", Value::Null)]));
    table
}
