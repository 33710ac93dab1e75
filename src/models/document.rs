//! Parsed CSV document
//!
//! The header row plus the data rows of one uploaded file. Short rows are
//! tolerated: a missing trailing cell reads as an empty string.

use serde::{Deserialize, Serialize};

/// Offset between a data-row index and the row number shown to users:
/// one for the header line, one for 1-based display.
pub const DISPLAY_ROW_OFFSET: usize = 2;

/// Header and rows of a parsed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Column names, in file order
    pub headers: Vec<String>,
    /// Data rows, in file order
    pub rows: Vec<Vec<String>>,
}

impl ParsedDocument {
    /// Create a document from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Check whether the document has no header row
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns declared by the header row
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Raw cell value; missing cells read as ""
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// First non-empty value in a column, used as a sample in the mapping step
    pub fn sample(&self, column: usize) -> Option<&str> {
        (0..self.rows.len())
            .map(|row| self.cell(row, column).trim())
            .find(|value| !value.is_empty())
    }

    /// Row number shown to users for a data-row index
    pub fn display_row(index: usize) -> usize {
        index + DISPLAY_ROW_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> ParsedDocument {
        ParsedDocument::new(
            vec!["Name".into(), "ARR".into(), "Stage".into()],
            vec![
                vec!["Acme".into(), "".into()],
                vec!["Globex".into(), "$10".into(), "active".into()],
            ],
        )
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let doc = doc();
        assert_eq!(doc.cell(0, 2), "");
        assert_eq!(doc.cell(5, 0), "");
        assert_eq!(doc.cell(1, 2), "active");
    }

    #[test]
    fn test_sample_skips_blanks() {
        let doc = doc();
        assert_eq!(doc.sample(1), Some("$10"));
        assert_eq!(doc.sample(0), Some("Acme"));
    }

    #[test]
    fn test_display_row() {
        assert_eq!(ParsedDocument::display_row(0), 2);
        assert_eq!(ParsedDocument::display_row(9), 11);
    }
}
