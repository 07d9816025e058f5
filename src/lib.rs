//! # fieldlogic - Conditional Field Visibility and Location Rules
//!
//! **fieldlogic** evaluates the two kinds of rules that drive a custom-fields
//! editor: conditional logic that shows or hides a field depending on the
//! values of other fields, and location rules that decide whether a whole
//! field group attaches to the content being edited.
//!
//! Every evaluator is a pure function over caller-supplied data. There is no
//! internal state, no I/O, and evaluation never fails: malformed rules (unknown
//! operators, unknown context parameters, invalid patterns) evaluate to `false`.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Definitions**: Parse fields and field groups (from JSON, or
//!     from your own storage format via the `IntoFieldSet` trait).
//! 2.  **Build a Resolver**: `VisibilityResolver::builder` analyses the
//!     dependencies between fields once: evaluation order and circular logic.
//! 3.  **Resolve**: Call `resolve` with the current field values every time
//!     they change to get a visibility map.
//! 4.  **Attach Groups**: Use `filter_field_groups` (or `should_show_field_group`)
//!     with a `LocationContext` to pick the field groups for a screen.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fieldlogic::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let fields = vec![
//!         Field::new("show_banner", FieldType::Boolean),
//!         Field::new("banner_text", FieldType::Text).with_logic(ConditionalLogic::all(vec![
//!             ConditionalRule::new("show_banner", Operator::Equals, true),
//!         ])),
//!     ];
//!
//!     let resolver = VisibilityResolver::builder(fields)
//!         .with_cycle_policy(CyclePolicy::Reject)
//!         .build()?;
//!
//!     let report = resolver.resolve(&json!({ "show_banner": true }))?;
//!     println!("banner_text visible: {}", report.is_visible("banner_text"));
//!
//!     let group = FieldGroup::new("group_banner", "Banner").with_location(vec![
//!         LocationGroup::from(vec![FieldLocation::new("post_type", "==", "page")]),
//!     ]);
//!     let context = LocationContext::new().with_post_type("page");
//!     println!("group attaches: {}", group.attaches_to(&context));
//!
//!     Ok(())
//! }
//! ```

pub mod conditional;
pub mod error;
pub mod field;
pub mod graph;
pub mod location;
pub mod prelude;
pub mod rule;
pub mod visibility;
