use crate::conditional::evaluate_logic;
use crate::field::{FieldValueSource, LogicTable};
use crate::graph::build_evaluation_order;
use std::collections::BTreeMap;

mod resolver;

pub use resolver::{CyclePolicy, VisibilityReport, VisibilityResolver, VisibilityResolverBuilder};

/// Field name to visibility. Fields without conditional logic are absent and
/// implicitly visible.
pub type VisibilityMap = BTreeMap<String, bool>;

/// Evaluates the logic of every field in `table` against `values`.
///
/// Fields are visited in dependency order, but each decision reads only
/// `values`, never the visibility computed so far.
pub fn evaluate_all<S>(table: &LogicTable, values: &S) -> VisibilityMap
where
    S: FieldValueSource + ?Sized,
{
    evaluate_in_order(table, &build_evaluation_order(table), values)
}

pub(crate) fn evaluate_in_order<S>(table: &LogicTable, order: &[String], values: &S) -> VisibilityMap
where
    S: FieldValueSource + ?Sized,
{
    let mut visibility = VisibilityMap::new();
    for name in order {
        visibility.insert(name.clone(), evaluate_logic(table.get(name), values));
    }
    visibility
}
