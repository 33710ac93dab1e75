//! Preview of an import
//!
//! Computed from scratch from the document and the current mapping each time
//! the wizard enters the preview step.

use crate::models::{
    ColumnMapping, ImportRecord, ParsedDocument, Schema, ValidationWarning, WarningSummary,
};
use crate::services::{build, duplicate_identities, summarize, validate, DuplicateIdentity};

/// Number of warnings listed before the "and N more" line
pub const PREVIEW_WARNING_LIMIT: usize = 50;

/// What an import would send, and what is wrong with the file
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    /// Records that will be sent
    pub records: Vec<ImportRecord>,
    /// Display rows dropped for a missing customer name
    pub skipped_rows: Vec<usize>,
    /// Data rows in the file
    pub total_rows: usize,
    /// Every warning, row-then-column
    pub warnings: Vec<ValidationWarning>,
    pub summary: WarningSummary,
    /// Records repeating an earlier customer name
    pub duplicates: Vec<DuplicateIdentity>,
}

impl Preview {
    pub fn compute(doc: &ParsedDocument, mapping: &ColumnMapping, schema: &Schema) -> Self {
        let warnings = validate(doc, mapping, schema);
        let summary = summarize(&warnings);
        let outcome = build(doc, mapping, schema);
        let duplicates = duplicate_identities(&outcome.records);

        Self {
            records: outcome.records,
            skipped_rows: outcome.skipped_rows,
            total_rows: outcome.total_rows,
            warnings,
            summary,
            duplicates,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_rows.len()
    }

    /// Warnings other than missing customer names
    pub fn other_warning_count(&self) -> usize {
        self.summary.invalid_values
    }

    /// The warnings to list
    pub fn visible_warnings(&self) -> &[ValidationWarning] {
        let end = self.warnings.len().min(PREVIEW_WARNING_LIMIT);
        &self.warnings[..end]
    }

    /// Warnings beyond the listed ones
    pub fn hidden_warning_count(&self) -> usize {
        self.warnings.len().saturating_sub(PREVIEW_WARNING_LIMIT)
    }

    pub fn can_import(&self) -> bool {
        !self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{auto_map, parse};

    fn preview(text: &str) -> Preview {
        let schema = Schema::customers();
        let doc = parse(text);
        let mapping = auto_map(&doc.headers, &schema);
        Preview::compute(&doc, &mapping, &schema)
    }

    #[test]
    fn test_counts() {
        let p = preview("Name,Health Score\nAcme,85\n,50\nGlobex,150\nacme,10\n");
        assert_eq!(p.record_count(), 3);
        assert_eq!(p.skipped_count(), 1);
        assert_eq!(p.other_warning_count(), 1);
        assert_eq!(p.duplicates.len(), 1);
        assert!(p.can_import());
    }

    #[test]
    fn test_warning_overflow() {
        let mut text = String::from("Name,Health Score\n");
        for i in 0..60 {
            text.push_str(&format!("Customer {},{}\n", i, 200 + i));
        }
        let p = preview(&text);
        assert_eq!(p.warnings.len(), 60);
        assert_eq!(p.visible_warnings().len(), PREVIEW_WARNING_LIMIT);
        assert_eq!(p.hidden_warning_count(), 10);
    }
}
