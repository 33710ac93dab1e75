//! Server import results

use serde::{Deserialize, Serialize};

/// A per-row rejection reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

/// The outcome of an import request, as reported by the server
///
/// `created`, `updated` and `skipped` are passed through when present; their
/// meaning is defined by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub imported: usize,
    #[serde(default)]
    pub errors: usize,
    #[serde(default)]
    pub error_details: Vec<RowError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<usize>,
}

impl ImportResult {
    /// Whether every sent record was accepted
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.error_details.is_empty()
    }

    /// The first `limit` row errors
    pub fn listed_errors(&self, limit: usize) -> &[RowError] {
        &self.error_details[..self.error_details.len().min(limit)]
    }

    /// Row errors beyond the first `limit`
    pub fn hidden_error_count(&self, limit: usize) -> usize {
        self.error_details.len().saturating_sub(limit)
    }
}
