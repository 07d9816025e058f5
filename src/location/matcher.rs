use super::{FieldLocation, LocationContext, LocationGroup, evaluate_location_rule};

/// All rules of one group must match. Blank rules are skipped; an empty group never matches.
pub fn evaluate_location_group(rules: &[FieldLocation], context: &LocationContext) -> bool {
    !rules.is_empty()
        && rules
            .iter()
            .all(|rule| rule.is_blank() || evaluate_location_rule(rule, context))
}

/// At least one group must match. No groups means no match.
pub fn evaluate_location_groups(groups: &[LocationGroup], context: &LocationContext) -> bool {
    groups
        .iter()
        .any(|group| evaluate_location_group(&group.rules, context))
}

/// Whether a field group with these location rules attaches to the context.
///
/// Field groups attach nowhere unless they define location rules, so a missing
/// or empty rule list yields `false`.
pub fn should_show_field_group(location: Option<&[LocationGroup]>, context: &LocationContext) -> bool {
    match location {
        Some(groups) if !groups.is_empty() => evaluate_location_groups(groups, context),
        _ => false,
    }
}
