use super::{ConditionalLogic, ConditionalRule, Field, FieldType};
use crate::error::FieldLogicError;
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::warn;

/// A trait for custom field-definition formats that can be converted into the
/// engine's `Field` model.
///
/// Stored definitions rarely match the engine's shape exactly (snake_case keys,
/// rule groups instead of a flat rule list, extra presentation settings). This
/// is the translation layer between such a format and the evaluators.
///
/// # Example
///
/// ```rust,no_run
/// use fieldlogic::prelude::*;
///
/// struct CmsField { key: String, kind: String }
/// struct CmsFieldSet(Vec<CmsField>);
///
/// impl IntoFieldSet for CmsFieldSet {
///     fn into_fields(self) -> Result<Vec<Field>> {
///         self.0
///             .into_iter()
///             .map(|stored| {
///                 let field_type = match stored.kind.as_str() {
///                     "number" => FieldType::Number,
///                     "true_false" => FieldType::Boolean,
///                     "text" => FieldType::Text,
///                     other => {
///                         return Err(FieldLogicError::ConversionError(format!(
///                             "unsupported field kind '{}'",
///                             other
///                         )));
///                     }
///                 };
///                 Ok(Field::new(stored.key, field_type))
///             })
///             .collect()
///     }
/// }
/// ```
pub trait IntoFieldSet {
    /// Consumes the definitions and converts them into engine fields.
    fn into_fields(self) -> Result<Vec<Field>, FieldLogicError>;
}

impl IntoFieldSet for Vec<Field> {
    fn into_fields(self) -> Result<Vec<Field>, FieldLogicError> {
        Ok(self)
    }
}

// --- Stored field-group format ---

/// Field definitions as a field-group store writes them.
///
/// `conditional_logic` may be the engine's own block, a list of OR-ed groups
/// of AND-ed rules, or `0`/`false` when the field has no logic.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct StoredFieldSet(Vec<StoredField>);

#[derive(Debug, Deserialize)]
struct StoredField {
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(default, alias = "conditionalLogic")]
    conditional_logic: Option<StoredLogic>,
}

// `Groups` comes first so that `[]` is read as "no groups" rather than as a
// sequence-form `ConditionalLogic` with every member defaulted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredLogic {
    Groups(Vec<Vec<ConditionalRule>>),
    Block(ConditionalLogic),
    Unset(IgnoredAny),
}

impl StoredFieldSet {
    /// Parses a JSON array of stored field definitions.
    pub fn from_json(json: &str) -> Result<Self, FieldLogicError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl IntoFieldSet for StoredFieldSet {
    fn into_fields(self) -> Result<Vec<Field>, FieldLogicError> {
        self.0
            .into_iter()
            .map(|stored| {
                if stored.name.trim().is_empty() {
                    return Err(FieldLogicError::ConversionError(
                        "field without a name".to_string(),
                    ));
                }
                let conditional_logic = match stored.conditional_logic {
                    Some(StoredLogic::Block(logic)) => Some(logic),
                    Some(StoredLogic::Groups(groups)) => logic_from_groups(&stored.name, groups),
                    Some(StoredLogic::Unset(_)) | None => None,
                };
                Ok(Field {
                    name: stored.name,
                    field_type: stored.field_type,
                    conditional_logic,
                })
            })
            .collect()
    }
}

/// Rule groups are OR-ed groups of AND-ed rules. A single group maps to `and`
/// logic and single-rule groups map to `or` logic; anything else keeps only the
/// first group. Empty groups are ignored, and no groups means no logic.
pub fn logic_from_groups(
    field: &str,
    mut groups: Vec<Vec<ConditionalRule>>,
) -> Option<ConditionalLogic> {
    groups.retain(|group| !group.is_empty());
    match groups.len() {
        0 => None,
        1 => groups.pop().map(ConditionalLogic::all),
        _ if groups.iter().all(|group| group.len() == 1) => {
            Some(ConditionalLogic::any(groups.into_iter().flatten().collect()))
        }
        count => {
            warn!(
                field,
                groups = count,
                "mixed AND/OR rule groups are not supported, keeping the first group"
            );
            groups.into_iter().next().map(ConditionalLogic::all)
        }
    }
}
