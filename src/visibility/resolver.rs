use super::{VisibilityMap, evaluate_in_order};
use crate::error::FieldLogicError;
use crate::field::{Field, FieldValueSource, LogicTable};
use crate::graph::{build_evaluation_order, find_circular_fields};
use crate::rule::Operator;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// What a resolver does when the field set contains circular conditional logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Evaluate anyway and report the cyclic fields alongside the result.
    #[default]
    Warn,
    /// Refuse to evaluate; `resolve` returns `FieldLogicError::CircularDependency`.
    Reject,
}

/// The outcome of resolving a field set against one snapshot of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityReport {
    pub visibility: VisibilityMap,
    pub evaluation_order: Vec<String>,
    pub circular_fields: Vec<String>,
}

impl VisibilityReport {
    /// Fields that are not in the map have no conditional logic and are visible.
    pub fn is_visible(&self, name: &str) -> bool {
        self.visibility.get(name).copied().unwrap_or(true)
    }

    pub fn has_cycles(&self) -> bool {
        !self.circular_fields.is_empty()
    }
}

/// Resolves field visibility for a fixed field set.
///
/// The dependency analysis (evaluation order, cyclic fields) depends only on
/// the field definitions and is done once in `build`; `resolve` can then be
/// called for every change of the field values.
#[derive(Debug, Clone)]
pub struct VisibilityResolver {
    table: LogicTable,
    order: Vec<String>,
    circular_fields: Vec<String>,
    cycle_policy: CyclePolicy,
}

#[derive(Debug)]
pub struct VisibilityResolverBuilder {
    fields: Vec<Field>,
    cycle_policy: CyclePolicy,
    operator_aliases: AHashMap<String, Operator>,
}

impl VisibilityResolverBuilder {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            cycle_policy: CyclePolicy::default(),
            operator_aliases: AHashMap::new(),
        }
    }

    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Maps an operator spelling the engine does not know onto a built-in operator.
    pub fn with_operator_alias(mut self, alias: &str, operator: Operator) -> Self {
        self.operator_aliases
            .insert(alias.trim().to_string(), operator);
        self
    }

    pub fn build(mut self) -> Result<VisibilityResolver, FieldLogicError> {
        {
            let mut seen = AHashSet::new();
            for field in &self.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(FieldLogicError::DuplicateField(field.name.clone()));
                }
            }
        }

        if !self.operator_aliases.is_empty() {
            self.apply_operator_aliases();
        }

        let table = LogicTable::from_fields(&self.fields);
        let order = build_evaluation_order(&table);
        let circular_fields = find_circular_fields(&table);
        if !circular_fields.is_empty() {
            warn!(
                fields = ?circular_fields,
                "conditional logic contains circular dependencies"
            );
        }

        Ok(VisibilityResolver {
            table,
            order,
            circular_fields,
            cycle_policy: self.cycle_policy,
        })
    }

    fn apply_operator_aliases(&mut self) {
        let rules = self
            .fields
            .iter_mut()
            .filter_map(|field| field.conditional_logic.as_mut())
            .flat_map(|logic| logic.rules.iter_mut());

        for rule in rules {
            if let Operator::Unknown(raw) = &rule.operator {
                if let Some(operator) = self.operator_aliases.get(raw.as_str()) {
                    rule.operator = operator.clone();
                }
            }
        }
    }
}

impl VisibilityResolver {
    pub fn builder(fields: Vec<Field>) -> VisibilityResolverBuilder {
        VisibilityResolverBuilder::new(fields)
    }

    /// Evaluates every field with conditional logic against `values`.
    pub fn resolve<S>(&self, values: &S) -> Result<VisibilityReport, FieldLogicError>
    where
        S: FieldValueSource + ?Sized,
    {
        if self.cycle_policy == CyclePolicy::Reject && self.has_cycles() {
            return Err(FieldLogicError::CircularDependency {
                fields: self.circular_fields.clone(),
            });
        }

        Ok(VisibilityReport {
            visibility: evaluate_in_order(&self.table, &self.order, values),
            evaluation_order: self.order.clone(),
            circular_fields: self.circular_fields.clone(),
        })
    }

    pub fn logic_table(&self) -> &LogicTable {
        &self.table
    }

    pub fn evaluation_order(&self) -> &[String] {
        &self.order
    }

    pub fn circular_fields(&self) -> &[String] {
        &self.circular_fields
    }

    pub fn has_cycles(&self) -> bool {
        !self.circular_fields.is_empty()
    }

    pub fn cycle_policy(&self) -> CyclePolicy {
        self.cycle_policy
    }
}
