use crate::rule::Operator;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The input kind of a field. The engine never dispatches on it; it is carried
/// so that callers can round-trip their definitions through the engine's model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Email,
    Url,
    Password,
    Wysiwyg,
    #[serde(alias = "true_false")]
    Boolean,
    Select,
    Radio,
    Checkbox,
    ButtonGroup,
    Date,
    DateTime,
    Time,
    ColorPicker,
    Image,
    File,
    Gallery,
    Link,
    PostObject,
    Relationship,
    Taxonomy,
    User,
    Repeater,
    Group,
    FlexibleContent,
    #[serde(other)]
    Other,
}

/// A named input definition, optionally gated by conditional logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_logic: Option<ConditionalLogic>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            conditional_logic: None,
        }
    }

    pub fn with_logic(mut self, logic: ConditionalLogic) -> Self {
        self.conditional_logic = Some(logic);
        self
    }
}

/// How the rules of a `ConditionalLogic` block are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LogicMode {
    #[default]
    And,
    Or,
}

impl From<String> for LogicMode {
    fn from(raw: String) -> Self {
        if raw.trim().eq_ignore_ascii_case("or") {
            LogicMode::Or
        } else {
            LogicMode::And
        }
    }
}

/// A boolean expression over other fields' values controlling one field's visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalLogic {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub logic: LogicMode,
    #[serde(default)]
    pub rules: Vec<ConditionalRule>,
}

fn enabled_by_default() -> bool {
    true
}

impl ConditionalLogic {
    /// Enabled logic that requires every rule to pass.
    pub fn all(rules: Vec<ConditionalRule>) -> Self {
        Self {
            enabled: true,
            logic: LogicMode::And,
            rules,
        }
    }

    /// Enabled logic that requires at least one rule to pass.
    pub fn any(rules: Vec<ConditionalRule>) -> Self {
        Self {
            enabled: true,
            logic: LogicMode::Or,
            rules,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// One atomic condition: compare the value of `field` against `value` using `operator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalRule {
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: Value,
}

impl ConditionalRule {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}
