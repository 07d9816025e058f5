use ahash::AHashMap;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// A snapshot of current field values keyed by field name.
pub type FieldValues = AHashMap<String, Value>;

/// Read-only access to the current value of a field.
///
/// A missing entry stands for an undefined value; operators treat it as empty.
pub trait FieldValueSource {
    fn field_value(&self, name: &str) -> Option<&Value>;
}

impl FieldValueSource for AHashMap<String, Value> {
    fn field_value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> FieldValueSource for HashMap<String, Value, S> {
    fn field_value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl FieldValueSource for Map<String, Value> {
    fn field_value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Looks up keys of a JSON object; any other JSON value has no fields.
impl FieldValueSource for Value {
    fn field_value(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(name))
    }
}
