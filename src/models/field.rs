//! Field definitions for the import schema
//!
//! A field is one importable business attribute of a customer. The set of
//! fields is closed: `FieldKey` enumerates every key a column can map to, so
//! a mapping can never reference a field that does not exist.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CscxError;

/// Stable identifier of an importable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Name,
    Industry,
    Arr,
    HealthScore,
    Stage,
    RenewalDate,
    CsmName,
    PrimaryContactName,
    PrimaryContactEmail,
}

impl FieldKey {
    /// All keys, in schema declaration order
    pub const ALL: [FieldKey; 9] = [
        FieldKey::Name,
        FieldKey::Industry,
        FieldKey::Arr,
        FieldKey::HealthScore,
        FieldKey::Stage,
        FieldKey::RenewalDate,
        FieldKey::CsmName,
        FieldKey::PrimaryContactName,
        FieldKey::PrimaryContactEmail,
    ];

    /// The wire/template name of this key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Industry => "industry",
            Self::Arr => "arr",
            Self::HealthScore => "health_score",
            Self::Stage => "stage",
            Self::RenewalDate => "renewal_date",
            Self::CsmName => "csm_name",
            Self::PrimaryContactName => "primary_contact_name",
            Self::PrimaryContactEmail => "primary_contact_email",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = CscxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| CscxError::UnknownField(s.trim().to_string()))
    }
}

/// How a raw cell is coerced into a record value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed string, passed through
    Text,
    /// Money amount; `$`, `,` and whitespace are stripped before parsing
    Currency,
    /// Plain number
    Numeric,
    /// Closed set of lowercase, underscore-separated values
    Enumerated(&'static [&'static str]),
}

/// A per-field validator: returns an error message for a bad value
pub type Validator = fn(&str) -> Option<String>;

/// Immutable schema entry
#[derive(Debug, Clone, Copy)]
pub struct FieldDefinition {
    /// Stable identifier
    pub key: FieldKey,
    /// Display name
    pub label: &'static str,
    /// Whether a row must carry this field to be importable
    pub required: bool,
    /// Lowercase header spellings that auto-map to this field
    pub aliases: &'static [&'static str],
    /// Coercion applied by the record builder
    pub kind: FieldKind,
    /// Optional value check run by the validation engine
    pub validator: Option<Validator>,
}

impl FieldDefinition {
    /// Check whether a normalized (lowercase, trimmed) header is an alias
    pub fn matches_alias(&self, normalized_header: &str) -> bool {
        self.aliases.iter().any(|alias| *alias == normalized_header)
    }

    /// Run the validator, if any
    pub fn check(&self, value: &str) -> Option<String> {
        self.validator.and_then(|validate| validate(value))
    }
}

static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-]+").expect("separator pattern is valid"));

/// Normalize an enumerated value: lowercase, whitespace/hyphen runs become `_`
pub fn normalize_enum_value(value: &str) -> String {
    SEPARATOR_RUN
        .replace_all(&value.trim().to_lowercase(), "_")
        .into_owned()
}

/// Strip currency decoration (`$`, `,`, whitespace) from an amount
pub fn clean_currency(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect()
}

/// Parse a finite number; `NaN` and infinities are rejected
pub fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_key_round_trip_names() {
        for key in FieldKey::ALL {
            assert_eq!(key.as_str().parse::<FieldKey>().unwrap(), key);
        }
        assert_eq!(" Health_Score ".parse::<FieldKey>().unwrap(), FieldKey::HealthScore);
        assert!("revenue".parse::<FieldKey>().is_err());
    }

    #[test]
    fn test_field_key_serializes_snake_case() {
        let json = serde_json::to_string(&FieldKey::PrimaryContactEmail).unwrap();
        assert_eq!(json, "\"primary_contact_email\"");
    }

    #[test]
    fn test_normalize_enum_value() {
        assert_eq!(normalize_enum_value("At-Risk"), "at_risk");
        assert_eq!(normalize_enum_value("  at  risk "), "at_risk");
        assert_eq!(normalize_enum_value("ONBOARDING"), "onboarding");
    }

    #[test]
    fn test_clean_currency() {
        assert_eq!(clean_currency("$120,000"), "120000");
        assert_eq!(clean_currency(" $ 1,234.50 "), "1234.50");
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number("85"), Some(85.0));
        assert_eq!(parse_number("-2.5"), Some(-2.5));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number(""), None);
    }
}
