use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CardType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    BugFix,
    FeatureRequest,
    FeatureChange,
    Documentation,
    Testing,
    SecurityAudit,
    Cleanup,
}

impl CardType {
    pub fn all() -> &'static [CardType] {
        &[
            CardType::BugFix,
            CardType::FeatureRequest,
            CardType::FeatureChange,
            CardType::Documentation,
            CardType::Testing,
            CardType::SecurityAudit,
            CardType::Cleanup,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardType::BugFix => "bug_fix",
            CardType::FeatureRequest => "feature_request",
            CardType::FeatureChange => "feature_change",
            CardType::Documentation => "documentation",
            CardType::Testing => "testing",
            CardType::SecurityAudit => "security_audit",
            CardType::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CardType {
    type Err = crate::error::PunchcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bug_fix" | "bug-fix" => Ok(CardType::BugFix),
            "feature_request" | "feature-request" => Ok(CardType::FeatureRequest),
            "feature_change" | "feature-change" => Ok(CardType::FeatureChange),
            "documentation" => Ok(CardType::Documentation),
            "testing" => Ok(CardType::Testing),
            "security_audit" | "security-audit" => Ok(CardType::SecurityAudit),
            "cleanup" => Ok(CardType::Cleanup),
            _ => Err(crate::error::PunchcardError::UnknownCardType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A single value entered on a card form, already checked against its field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Toggle(bool),
    Rating(u8),
    Text(String),
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Toggle(_) => "toggle",
            FieldValue::Rating(_) => "rating",
            FieldValue::Text(_) => "text",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Toggle(b)
    }
}

impl From<u8> for FieldValue {
    fn from(n: u8) -> Self {
        FieldValue::Rating(n)
    }
}

// ---------------------------------------------------------------------------
// RawValue
// ---------------------------------------------------------------------------

/// A scalar as written in a values file, before the field it names decides
/// what it means. Untagged so files read naturally: `urgency: 4`,
/// `add_regression_test: true`, `runtime_version: 3.11`. A blank entry
/// (`error_messages:`) deserializes as `None` around this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Bool(_) => "boolean",
            RawValue::Int(_) => "integer",
            RawValue::Float(_) => "number",
            RawValue::Text(_) => "text",
        }
    }
}
