use super::lenient;
use crate::error::FieldLogicError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Operators available to location rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationOperator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    Unknown(String),
}

impl LocationOperator {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "==" => LocationOperator::Equals,
            "!=" => LocationOperator::NotEquals,
            "contains" => LocationOperator::Contains,
            "not_contains" | "!contains" => LocationOperator::NotContains,
            other => LocationOperator::Unknown(other.to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            LocationOperator::Equals => "==",
            LocationOperator::NotEquals => "!=",
            LocationOperator::Contains => "contains",
            LocationOperator::NotContains => "not_contains",
            LocationOperator::Unknown(raw) => raw,
        }
    }
}

impl From<String> for LocationOperator {
    fn from(raw: String) -> Self {
        LocationOperator::parse(&raw)
    }
}

impl From<&str> for LocationOperator {
    fn from(raw: &str) -> Self {
        LocationOperator::parse(raw)
    }
}

impl From<LocationOperator> for String {
    fn from(operator: LocationOperator) -> Self {
        match operator {
            LocationOperator::Unknown(raw) => raw,
            known => known.symbol().to_string(),
        }
    }
}

impl fmt::Display for LocationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One location condition over the content context, e.g. `post_type == "product"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLocation {
    pub param: String,
    pub operator: LocationOperator,
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: String,
}

impl FieldLocation {
    pub fn new(
        param: impl Into<String>,
        operator: impl Into<LocationOperator>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            param: param.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// A rule still being edited (no parameter or no value yet) constrains nothing.
    pub fn is_blank(&self) -> bool {
        self.param.trim().is_empty() || self.value.trim().is_empty()
    }
}

/// Location rules that must all match (AND).
///
/// Deserializes from a plain array of rules or from `{ "rules": [...] }`, and
/// always serializes as a plain array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GroupShape", into = "Vec<FieldLocation>")]
pub struct LocationGroup {
    pub rules: Vec<FieldLocation>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GroupShape {
    Rules(Vec<FieldLocation>),
    Wrapped { rules: Vec<FieldLocation> },
}

impl From<GroupShape> for LocationGroup {
    fn from(shape: GroupShape) -> Self {
        match shape {
            GroupShape::Rules(rules) | GroupShape::Wrapped { rules } => LocationGroup { rules },
        }
    }
}

impl From<LocationGroup> for Vec<FieldLocation> {
    fn from(group: LocationGroup) -> Self {
        group.rules
    }
}

impl From<Vec<FieldLocation>> for LocationGroup {
    fn from(rules: Vec<FieldLocation>) -> Self {
        LocationGroup { rules }
    }
}

/// Deserializes a full set of location rules: a list of groups (matched with OR).
///
/// A flat list of rules is read as a single group.
pub fn deserialize_location<'de, D>(deserializer: D) -> Result<Vec<LocationGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LocationShape {
        Groups(Vec<LocationGroup>),
        Flat(Vec<FieldLocation>),
    }

    Ok(match Option::<LocationShape>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(LocationShape::Groups(groups)) => groups,
        Some(LocationShape::Flat(rules)) => vec![LocationGroup { rules }],
    })
}

/// Parses JSON location rules in any of the accepted shapes.
pub fn parse_location(json: &str) -> Result<Vec<LocationGroup>, FieldLogicError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let groups = deserialize_location(&mut deserializer)?;
    deserializer.end()?;
    Ok(groups)
}
