use thiserror::Error;

/// Errors raised by the fallible surfaces of the engine: loading definitions,
/// building a resolver and resolving under a strict cycle policy.
///
/// Rule evaluation itself never fails; malformed rules evaluate to `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldLogicError {
    #[error("Failed to parse field definition JSON: {0}")]
    JsonParseError(String),

    #[error("Field '{0}' is defined more than once in the field set")]
    DuplicateField(String),

    #[error("Conditional logic has a circular dependency involving: {}", fields.join(", "))]
    CircularDependency { fields: Vec<String> },

    #[error("Invalid custom field data: {0}")]
    ConversionError(String),
}

impl From<serde_json::Error> for FieldLogicError {
    fn from(err: serde_json::Error) -> Self {
        FieldLogicError::JsonParseError(err.to_string())
    }
}
