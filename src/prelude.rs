//! Prelude module for convenient imports
//!
//! Re-exports the types and functions most callers need, so that a single
//! `use fieldlogic::prelude::*;` is enough to define fields, resolve their
//! visibility and match field groups against a location context.

// Field model
pub use crate::field::{
    ConditionalLogic, ConditionalRule, Field, FieldType, FieldValueSource, FieldValues,
    IntoFieldSet, LogicMode, LogicTable, StoredFieldSet, logic_from_groups, parse_fields,
};

// Conditional logic
pub use crate::conditional::evaluate_logic;
pub use crate::graph::{
    build_evaluation_order, find_circular_fields, get_dependencies, has_circular_dependency,
};
pub use crate::rule::{Operator, evaluate_rule};
pub use crate::visibility::{
    CyclePolicy, VisibilityMap, VisibilityReport, VisibilityResolver, evaluate_all,
};

// Location rules
pub use crate::location::{
    FieldGroup, FieldLocation, LocationContext, LocationGroup, LocationOperator,
    evaluate_location_group, evaluate_location_groups, evaluate_location_rule,
    filter_field_groups, parse_field_groups, parse_location, should_show_field_group,
};

// Error types
pub use crate::error::FieldLogicError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FieldLogicError>;
