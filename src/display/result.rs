//! Import result and history display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::history::HistoryEntry;
use crate::models::ImportResult;
use crate::wizard::RESULT_ERROR_LIMIT;

/// Format the server's answer
pub fn format_import_result(result: &ImportResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Imported: {}\n", result.imported));
    output.push_str(&format!("Errors:   {}\n", result.errors));
    if let Some(created) = result.created {
        output.push_str(&format!("Created:  {}\n", created));
    }
    if let Some(updated) = result.updated {
        output.push_str(&format!("Updated:  {}\n", updated));
    }
    if let Some(skipped) = result.skipped {
        output.push_str(&format!("Skipped:  {}\n", skipped));
    }

    if !result.error_details.is_empty() {
        output.push('\n');
        output.push_str("Rejected rows:\n");
        for detail in result.listed_errors(RESULT_ERROR_LIMIT) {
            output.push_str(&format!("  Row {:>5}  {}\n", detail.row, detail.message));
        }
        let hidden = result.hidden_error_count(RESULT_ERROR_LIMIT);
        if hidden > 0 {
            output.push_str(&format!("  ...and {} more\n", hidden));
        }
    }

    output
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "When (UTC)")]
    when: String,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Workspace")]
    workspace: String,
    #[tabled(rename = "Sent")]
    sent: usize,
    #[tabled(rename = "Imported")]
    imported: usize,
    #[tabled(rename = "Errors")]
    errors: usize,
}

/// Format history entries, newest first
pub fn format_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No imports recorded.".to_string();
    }

    let rows = entries.iter().rev().map(|entry| HistoryRow {
        when: entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
        file: entry.file_name.clone(),
        workspace: entry.workspace_id.clone(),
        sent: entry.records_sent,
        imported: entry.imported,
        errors: entry.errors,
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RowError, SessionId};

    #[test]
    fn test_result_with_details() {
        let result = ImportResult {
            imported: 2,
            errors: 1,
            error_details: vec![RowError {
                row: 4,
                message: "Duplicate customer".into(),
            }],
            created: Some(1),
            updated: Some(1),
            skipped: None,
        };
        let output = format_import_result(&result);
        assert!(output.contains("Imported: 2"));
        assert!(output.contains("Updated:  1"));
        assert!(!output.contains("Skipped"));
        assert!(output.contains("Duplicate customer"));
    }

    #[test]
    fn test_rejected_rows_are_bounded() {
        let result = ImportResult {
            imported: 0,
            errors: 500,
            error_details: (1..=500)
                .map(|row| RowError {
                    row: row + 1,
                    message: "Invalid email".into(),
                })
                .collect(),
            ..Default::default()
        };
        let output = format_import_result(&result);
        let listed = output.lines().filter(|l| l.trim_start().starts_with("Row ")).count();
        assert_eq!(listed, RESULT_ERROR_LIMIT);
        assert!(output.ends_with(&format!("  ...and {} more\n", 500 - RESULT_ERROR_LIMIT)));
    }

    #[test]
    fn test_history_newest_first() {
        let result = ImportResult::default();
        let first = HistoryEntry::from_import(SessionId::new(), "old.csv", "ws", 1, &result);
        let second = HistoryEntry::from_import(SessionId::new(), "new.csv", "ws", 2, &result);

        let output = format_history(&[first, second]);
        let new_pos = output.find("new.csv").unwrap();
        let old_pos = output.find("old.csv").unwrap();
        assert!(new_pos < old_pos);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_history(&[]), "No imports recorded.");
    }
}
