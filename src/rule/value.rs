//! Normalization and coercion helpers shared by the rule operators.
//!
//! Field values arrive as loosely-typed JSON (form inputs hand back `"true"`
//! for checkboxes, numbers as strings, arrays for multi-selects), so
//! comparisons follow dynamic-language coercion rules rather than strict
//! JSON equality.

use serde_json::Value;
use std::borrow::Cow;

/// `true` for a missing value, `null`, `""` and `[]`. Zero and `false` are not empty.
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// Maps a missing value and `null` to `""`, and the strings `"true"`/`"false"`
/// to booleans. Everything else is borrowed unchanged.
pub fn normalize(value: Option<&Value>) -> Cow<'_, Value> {
    match value {
        None | Some(Value::Null) => Cow::Owned(Value::String(String::new())),
        Some(Value::String(s)) if s == "true" => Cow::Owned(Value::Bool(true)),
        Some(Value::String(s)) if s == "false" => Cow::Owned(Value::Bool(false)),
        Some(other) => Cow::Borrowed(other),
    }
}

/// Numeric coercion. Anything without a numeric reading becomes `NaN`.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => parse_number(&to_display_string(single)),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    match trimmed.parse::<f64>() {
        // Rust also accepts "inf" and "NaN" spellings, which are not numbers here.
        Ok(n) if n.is_finite() => n,
        _ => f64::NAN,
    }
}

/// The string form of a value, as a form would display it.
///
/// Arrays join their elements with `,` (with `null` elements rendered empty),
/// objects render as `[object Object]`.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Loose equality between two normalized values.
///
/// Same-kind primitives compare directly, mixed primitives compare
/// numerically, a container against a primitive compares its string form,
/// and two containers compare structurally.
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Array(_) | Value::Object(_), Value::Array(_) | Value::Object(_)) => a == b,
        (Value::Array(_) | Value::Object(_), _) => {
            loose_equals(&Value::String(to_display_string(a)), b)
        }
        (_, Value::Array(_) | Value::Object(_)) => {
            loose_equals(a, &Value::String(to_display_string(b)))
        }
        _ => to_number(a) == to_number(b),
    }
}
