use super::{LocationContext, LocationGroup, deserialize_location, should_show_field_group};
use crate::error::FieldLogicError;
use crate::field::Field;
use serde::{Deserialize, Serialize};

/// A set of fields together with the location rules deciding where it attaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    #[serde(alias = "name")]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, deserialize_with = "deserialize_location")]
    pub location: Vec<LocationGroup>,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

impl FieldGroup {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            fields: Vec::new(),
            location: Vec::new(),
            active: true,
        }
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_location(mut self, location: Vec<LocationGroup>) -> Self {
        self.location = location;
        self
    }

    /// Inactive groups never attach.
    pub fn attaches_to(&self, context: &LocationContext) -> bool {
        self.active && should_show_field_group(Some(self.location.as_slice()), context)
    }
}

/// The field groups that attach to `context`, in their original order.
pub fn filter_field_groups<'a>(
    groups: &'a [FieldGroup],
    context: &LocationContext,
) -> Vec<&'a FieldGroup> {
    groups
        .iter()
        .filter(|group| group.attaches_to(context))
        .collect()
}

/// Parses a JSON array of field groups.
pub fn parse_field_groups(json: &str) -> Result<Vec<FieldGroup>, FieldLogicError> {
    Ok(serde_json::from_str(json)?)
}
