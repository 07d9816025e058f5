pub mod conversion;
pub mod definition;
pub mod table;
pub mod values;

pub use conversion::*;
pub use definition::*;
pub use table::*;
pub use values::*;

use crate::error::FieldLogicError;

/// Parses a JSON array of field definitions.
pub fn parse_fields(json: &str) -> Result<Vec<Field>, FieldLogicError> {
    Ok(serde_json::from_str(json)?)
}
