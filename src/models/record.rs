//! Typed import records

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::FieldKey;

/// A coerced cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// One customer ready to send: field key -> value, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportRecord {
    values: BTreeMap<FieldKey, FieldValue>,
}

impl ImportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FieldKey, value: FieldValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.values.get(&key)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &FieldValue)> {
        self.values.iter()
    }

    /// The customer name, when present as text
    pub fn name(&self) -> Option<&str> {
        self.get(FieldKey::Name).and_then(FieldValue::as_text)
    }
}

/// Result of building records from a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOutcome {
    /// Records carrying the identity field, in row order
    pub records: Vec<ImportRecord>,
    /// Display row numbers of rows dropped for lacking the identity field
    pub skipped_rows: Vec<usize>,
    /// Number of data rows examined
    pub total_rows: usize,
}

impl BuildOutcome {
    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_as_flat_object() {
        let mut record = ImportRecord::new();
        record.insert(FieldKey::Name, "Acme".into());
        record.insert(FieldKey::Arr, 120000.0.into());
        record.insert(FieldKey::Stage, "active".into());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Acme", "arr": 120000.0, "stage": "active"})
        );
    }

    #[test]
    fn test_record_deserializes_numbers_and_text() {
        let record: ImportRecord =
            serde_json::from_str(r#"{"name": "Acme", "health_score": 85}"#).unwrap();
        assert_eq!(record.name(), Some("Acme"));
        assert_eq!(
            record.get(FieldKey::HealthScore).and_then(FieldValue::as_number),
            Some(85.0)
        );
    }
}
