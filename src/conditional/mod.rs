use crate::field::{ConditionalLogic, FieldValueSource, LogicMode};
use crate::rule::evaluate_rule;

/// Decides whether a field governed by `logic` is shown for the given values.
///
/// Missing or disabled logic, and logic without rules, always show the field.
/// Otherwise every rule must pass under `and`, and at least one under `or`.
/// Only `values` is consulted: the visibility of other fields plays no part,
/// so a hidden field's value still counts for the fields that reference it.
pub fn evaluate_logic<S>(logic: Option<&ConditionalLogic>, values: &S) -> bool
where
    S: FieldValueSource + ?Sized,
{
    let Some(logic) = logic else {
        return true;
    };
    if !logic.enabled || logic.rules.is_empty() {
        return true;
    }

    let mut outcomes = logic
        .rules
        .iter()
        .map(|rule| evaluate_rule(rule, values.field_value(&rule.field)));

    match logic.logic {
        LogicMode::And => outcomes.all(|passed| passed),
        LogicMode::Or => outcomes.any(|passed| passed),
    }
}
