//! Preview display

use crate::wizard::Preview;

/// Format the counts shown before importing
pub fn format_preview_summary(preview: &Preview) -> String {
    let mut output = String::new();

    output.push_str(&format!("Rows in file:        {}\n", preview.total_rows));
    output.push_str(&format!("Records to import:   {}\n", preview.record_count()));
    output.push_str(&format!(
        "Skipped (no name):   {}\n",
        preview.skipped_count()
    ));
    output.push_str(&format!(
        "Other warnings:      {}\n",
        preview.other_warning_count()
    ));

    if !preview.duplicates.is_empty() {
        output.push_str(&format!(
            "Repeated names:      {} (sent as-is; the server decides)\n",
            preview.duplicates.len()
        ));
    }

    output
}

/// Format the first warnings, one per line, with an overflow line
pub fn format_warnings(preview: &Preview) -> String {
    if preview.warnings.is_empty() {
        return "No warnings.".to_string();
    }

    let mut output = String::new();
    for warning in preview.visible_warnings() {
        output.push_str(&format!(
            "  Row {:>5}  {:<15} {}\n",
            warning.row, warning.field, warning.message
        ));
    }

    let hidden = preview.hidden_warning_count();
    if hidden > 0 {
        output.push_str(&format!("  ...and {} more\n", hidden));
    }

    output
}
