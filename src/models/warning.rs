//! Row-level validation findings

use serde::{Deserialize, Serialize};

/// What kind of problem a warning describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The identity field is missing; the row will be skipped
    MissingRequired,
    /// A value failed its field validator; the row is still imported
    InvalidValue,
}

/// A non-fatal, row-scoped validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Row number as shown to users (first data row is 2)
    pub row: usize,
    /// Field key for missing-identity warnings, field label otherwise
    pub field: String,
    pub message: String,
    pub kind: WarningKind,
}

impl ValidationWarning {
    pub fn missing_required(row: usize, field: impl Into<String>, label: &str) -> Self {
        Self {
            row,
            field: field.into(),
            message: format!("{} is required", label),
            kind: WarningKind::MissingRequired,
        }
    }

    pub fn invalid_value(row: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.into(),
            message: message.into(),
            kind: WarningKind::InvalidValue,
        }
    }

    pub fn is_missing_required(&self) -> bool {
        self.kind == WarningKind::MissingRequired
    }
}

/// Warning counts split the way the preview reports them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarningSummary {
    pub missing_required: usize,
    pub invalid_values: usize,
}

impl WarningSummary {
    pub fn from_warnings(warnings: &[ValidationWarning]) -> Self {
        let missing_required = warnings.iter().filter(|w| w.is_missing_required()).count();
        Self {
            missing_required,
            invalid_values: warnings.len() - missing_required,
        }
    }

    pub fn total(&self) -> usize {
        self.missing_required + self.invalid_values
    }
}
