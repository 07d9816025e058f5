//! Dependency analysis over conditional logic.
//!
//! A field depends on every field its (enabled) rules reference. These edges
//! are derived on every call and never stored.

use crate::field::{ConditionalLogic, ConditionalRule, LogicTable};
use ahash::AHashSet;
use itertools::Itertools;

/// Field names referenced by `logic`, in rule order, each listed once.
/// Blank references are dropped and disabled logic has no dependencies.
pub fn get_dependencies(logic: Option<&ConditionalLogic>) -> Vec<String> {
    logic
        .map(|logic| dependency_refs(logic).map(str::to_string).collect())
        .unwrap_or_default()
}

fn dependency_refs(logic: &ConditionalLogic) -> impl Iterator<Item = &str> {
    let rules: &[ConditionalRule] = if logic.enabled {
        logic.rules.as_slice()
    } else {
        &[]
    };
    rules
        .iter()
        .map(|rule| rule.field.as_str())
        .filter(|field| !field.trim().is_empty())
        .unique()
}

/// Whether following dependency edges from `field_name` ever returns to a
/// field already on the current path, i.e. the field sits on a cycle or
/// depends on one.
///
/// `logic` is the field's own logic; the logic of every other field is looked
/// up in `table`.
pub fn has_circular_dependency(
    field_name: &str,
    logic: Option<&ConditionalLogic>,
    table: &LogicTable,
) -> bool {
    detect_cycle(field_name, logic, table, &AHashSet::new(), &mut AHashSet::new())
}

/// Each branch receives its own copy of the path so that sibling branches do
/// not see each other's fields.
///
/// `clean` collects fields whose whole dependency closure was walked without
/// finding a cycle. Such a field can never lead back onto any path, so it is
/// not walked again.
fn detect_cycle(
    field_name: &str,
    logic: Option<&ConditionalLogic>,
    table: &LogicTable,
    visited: &AHashSet<String>,
    clean: &mut AHashSet<String>,
) -> bool {
    if visited.contains(field_name) {
        return true;
    }
    if clean.contains(field_name) {
        return false;
    }
    let Some(logic) = logic else {
        return false;
    };

    let mut path = visited.clone();
    path.insert(field_name.to_string());

    let circular = dependency_refs(logic).any(|dependency| {
        detect_cycle(dependency, table.get(dependency), table, &path, clean)
    });
    if !circular {
        clean.insert(field_name.to_string());
    }
    circular
}

/// Every field of `table` (in table order) that has a circular dependency.
pub fn find_circular_fields(table: &LogicTable) -> Vec<String> {
    let mut clean = AHashSet::new();
    table
        .iter()
        .filter(|&(name, logic)| {
            detect_cycle(name, Some(logic), table, &AHashSet::new(), &mut clean)
        })
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Orders the fields of `table` so that dependencies come before dependents.
///
/// Every field appears exactly once. A field already on the recursion stack is
/// skipped instead of re-entered, so a cycle is cut at an arbitrary point
/// rather than looping. References to fields outside the table are not emitted.
pub fn build_evaluation_order(table: &LogicTable) -> Vec<String> {
    let mut order = Vec::with_capacity(table.len());
    let mut visited = AHashSet::new();
    let mut in_progress = AHashSet::new();

    for name in table.names() {
        visit(name, table, &mut visited, &mut in_progress, &mut order);
    }
    order
}

fn visit<'a>(
    name: &'a str,
    table: &'a LogicTable,
    visited: &mut AHashSet<&'a str>,
    in_progress: &mut AHashSet<&'a str>,
    order: &mut Vec<String>,
) {
    if visited.contains(name) || !in_progress.insert(name) {
        return;
    }

    if let Some(logic) = table.get(name) {
        for dependency in dependency_refs(logic) {
            if table.contains(dependency) {
                visit(dependency, table, visited, in_progress, order);
            }
        }
    }

    in_progress.remove(name);
    visited.insert(name);
    order.push(name.to_string());
}
