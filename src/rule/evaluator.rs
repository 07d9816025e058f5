use super::Operator;
use super::value::{is_empty_value, loose_equals, normalize, to_display_string, to_number};
use crate::field::ConditionalRule;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Evaluates one conditional rule against the current value of the field it references.
///
/// `actual` is `None` when the referenced field has no value (or does not
/// exist). The result is always a plain boolean: unknown operators, non-numeric
/// operands of numeric comparisons and malformed patterns all evaluate to `false`.
pub fn evaluate_rule(rule: &ConditionalRule, actual: Option<&Value>) -> bool {
    match &rule.operator {
        Operator::Empty => is_empty_value(actual),
        Operator::NotEmpty => !is_empty_value(actual),
        Operator::Unknown(raw) => {
            debug!(operator = %raw, field = %rule.field, "unknown conditional operator");
            false
        }
        operator => compare(
            operator,
            &normalize(actual),
            &normalize(Some(&rule.value)),
        ),
    }
}

fn compare(operator: &Operator, actual: &Value, expected: &Value) -> bool {
    match operator {
        Operator::Equals => loose_equals(actual, expected),
        Operator::NotEquals => !loose_equals(actual, expected),
        Operator::GreaterThan => compare_numbers(actual, expected, |a, b| a > b),
        Operator::LessThan => compare_numbers(actual, expected, |a, b| a < b),
        Operator::GreaterOrEqual => compare_numbers(actual, expected, |a, b| a >= b),
        Operator::LessOrEqual => compare_numbers(actual, expected, |a, b| a <= b),
        Operator::Contains => contains_text(actual, expected),
        Operator::NotContains => !contains_text(actual, expected),
        Operator::Pattern => match_pattern(expected, actual).unwrap_or(false),
        Operator::NotPattern => match_pattern(expected, actual).is_some_and(|matched| !matched),
        Operator::Empty | Operator::NotEmpty | Operator::Unknown(_) => false,
    }
}

/// Any comparison involving `NaN` is `false`, so no extra guard is needed.
fn compare_numbers(actual: &Value, expected: &Value, op: impl Fn(f64, f64) -> bool) -> bool {
    op(to_number(actual), to_number(expected))
}

fn contains_text(actual: &Value, expected: &Value) -> bool {
    let haystack = to_display_string(actual).to_lowercase();
    let needle = to_display_string(expected).to_lowercase();
    haystack.contains(&needle)
}

/// `None` when the pattern does not compile.
fn match_pattern(pattern: &Value, actual: &Value) -> Option<bool> {
    let source = to_display_string(pattern);
    match Regex::new(&source) {
        Ok(re) => Some(re.is_match(&to_display_string(actual))),
        Err(e) => {
            debug!(pattern = %source, error = %e, "invalid pattern in conditional rule");
            None
        }
    }
}
