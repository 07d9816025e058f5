use super::{ContextValue, FieldLocation, LocationContext, LocationOperator, LocationParam};
use std::borrow::Cow;
use tracing::debug;

/// Evaluates one location rule against the context.
///
/// List-valued parameters (categories, roles, taxonomy terms) use exact
/// membership for `==`/`!=` and case-insensitive substring search over the
/// elements for `contains`/`not_contains`. Scalar parameters compare
/// lower-cased strings. Unknown parameters and operators evaluate to `false`.
pub fn evaluate_location_rule(rule: &FieldLocation, context: &LocationContext) -> bool {
    let Some(param) = LocationParam::parse(&rule.param) else {
        debug!(param = %rule.param, "unknown location parameter");
        return false;
    };
    if let LocationOperator::Unknown(raw) = &rule.operator {
        debug!(operator = %raw, param = %rule.param, "unknown location operator");
        return false;
    }

    match context.resolve(param) {
        ContextValue::List(items) => match_list(&rule.operator, &items, &rule.value),
        ContextValue::Scalar(actual) => match_scalar(&rule.operator, actual, &rule.value),
    }
}

fn match_list(operator: &LocationOperator, items: &[Cow<'_, str>], expected: &str) -> bool {
    let includes = || items.iter().any(|item| item.as_ref() == expected);
    let any_contains = || {
        let needle = expected.to_lowercase();
        items
            .iter()
            .any(|item| item.to_lowercase().contains(&needle))
    };

    match operator {
        LocationOperator::Equals => includes(),
        LocationOperator::NotEquals => !includes(),
        LocationOperator::Contains => any_contains(),
        LocationOperator::NotContains => !any_contains(),
        LocationOperator::Unknown(_) => false,
    }
}

fn match_scalar(operator: &LocationOperator, actual: &str, expected: &str) -> bool {
    let actual = actual.to_lowercase();
    let expected = expected.to_lowercase();

    match operator {
        LocationOperator::Equals => actual == expected,
        LocationOperator::NotEquals => actual != expected,
        LocationOperator::Contains => actual.contains(&expected),
        LocationOperator::NotContains => !actual.contains(&expected),
        LocationOperator::Unknown(_) => false,
    }
}
