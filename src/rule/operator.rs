use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators available to conditional-logic rules.
///
/// Deserialization never fails on an unrecognized spelling; it yields
/// `Operator::Unknown`, which evaluates to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    Contains,
    NotContains,
    Pattern,
    NotPattern,
    Empty,
    NotEmpty,
    Unknown(String),
}

impl Operator {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "==" | "=" | "equals" | "eq" => Operator::Equals,
            "!=" | "not_equals" | "not-equals" | "neq" => Operator::NotEquals,
            ">" | "greater_than" | "greater-than" | "gt" => Operator::GreaterThan,
            "<" | "less_than" | "less-than" | "lt" => Operator::LessThan,
            ">=" | "greater_or_equal" | "greater-or-equal" | "gte" => Operator::GreaterOrEqual,
            "<=" | "less_or_equal" | "less-or-equal" | "lte" => Operator::LessOrEqual,
            "contains" => Operator::Contains,
            "!contains" | "not_contains" | "not-contains" => Operator::NotContains,
            "pattern" | "matches" | "matches_pattern" | "matches-pattern" => Operator::Pattern,
            "!pattern" | "not_pattern" | "not_matches_pattern" | "not-matches-pattern" => {
                Operator::NotPattern
            }
            "empty" | "is_empty" | "is-empty" | "==empty" => Operator::Empty,
            "!empty" | "not_empty" | "is_not_empty" | "is-not-empty" | "!=empty" => {
                Operator::NotEmpty
            }
            other => Operator::Unknown(other.to_string()),
        }
    }

    /// The canonical spelling used when serializing.
    pub fn symbol(&self) -> &str {
        match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::Contains => "contains",
            Operator::NotContains => "!contains",
            Operator::Pattern => "pattern",
            Operator::NotPattern => "!pattern",
            Operator::Empty => "empty",
            Operator::NotEmpty => "!empty",
            Operator::Unknown(raw) => raw,
        }
    }

    /// Empty checks look at the raw value and ignore the rule's comparison value.
    pub fn is_empty_check(&self) -> bool {
        matches!(self, Operator::Empty | Operator::NotEmpty)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Operator::Unknown(_))
    }
}

impl From<String> for Operator {
    fn from(raw: String) -> Self {
        Operator::parse(&raw)
    }
}

impl From<&str> for Operator {
    fn from(raw: &str) -> Self {
        Operator::parse(raw)
    }
}

impl From<Operator> for String {
    fn from(operator: Operator) -> Self {
        match operator {
            Operator::Unknown(raw) => raw,
            known => known.symbol().to_string(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
