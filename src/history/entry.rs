//! Import history entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ImportResult, SessionId};

/// One completed import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the server answered (UTC)
    pub timestamp: DateTime<Utc>,

    /// Session that ran the import
    pub session_id: SessionId,

    /// Name of the imported file
    pub file_name: String,

    /// Workspace the customers were sent to
    pub workspace_id: String,

    /// Records included in the request
    pub records_sent: usize,

    /// Records the server accepted
    pub imported: usize,

    /// Records the server rejected
    pub errors: usize,
}

impl HistoryEntry {
    /// Record a finished import
    pub fn from_import(
        session_id: SessionId,
        file_name: impl Into<String>,
        workspace_id: impl Into<String>,
        records_sent: usize,
        result: &ImportResult,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
            file_name: file_name.into(),
            workspace_id: workspace_id.into(),
            records_sent,
            imported: result.imported,
            errors: result.errors,
        }
    }

    /// One-line summary for listings
    pub fn format_human_readable(&self) -> String {
        format!(
            "{} {} -> {}: {} sent, {} imported, {} errors",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.file_name,
            self.workspace_id,
            self.records_sent,
            self.imported,
            self.errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_import() {
        let result = ImportResult {
            imported: 4,
            errors: 1,
            ..Default::default()
        };
        let entry = HistoryEntry::from_import(SessionId::new(), "customers.csv", "ws", 5, &result);
        assert_eq!(entry.records_sent, 5);
        assert_eq!(entry.imported, 4);
        assert!(entry
            .format_human_readable()
            .ends_with("customers.csv -> ws: 5 sent, 4 imported, 1 errors"));
    }
}
