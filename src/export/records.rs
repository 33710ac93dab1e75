//! Export of built records
//!
//! Writes the record set a preview would send, as JSON or YAML, so it can be
//! inspected without importing.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CscxError, CscxResult};
use crate::models::ImportRecord;
use crate::wizard::Preview;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A preview's records plus context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Source file
    pub file_name: String,

    /// Workspace the records would be sent to
    pub workspace_id: String,

    /// Display rows dropped for a missing customer name
    pub skipped_rows: Vec<usize>,

    /// The records, in row order
    pub records: Vec<ImportRecord>,
}

impl RecordExport {
    pub fn from_preview(
        preview: &Preview,
        file_name: impl Into<String>,
        workspace_id: impl Into<String>,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            file_name: file_name.into(),
            workspace_id: workspace_id.into(),
            skipped_rows: preview.skipped_rows.clone(),
            records: preview.records.clone(),
        }
    }
}

/// Write the export as JSON
pub fn export_records_json<W: Write>(
    export: &RecordExport,
    writer: &mut W,
    pretty: bool,
) -> CscxResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| CscxError::Export(e.to_string()))
}

/// Write the export as YAML with a short header comment
pub fn export_records_yaml<W: Write>(export: &RecordExport, writer: &mut W) -> CscxResult<()> {
    writeln!(writer, "# cscx-import record export")
        .map_err(|e| CscxError::Export(e.to_string()))?;
    writeln!(writer, "# Source: {}", export.file_name)
        .map_err(|e| CscxError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| CscxError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CscxError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| CscxError::Export(e.to_string()))
}
