//! Custom error types for cscx-import
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::api::ApiError;

/// The main error type for cscx-import operations
#[derive(Error, Debug)]
pub enum CscxError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The selected file does not have a .csv extension
    #[error("Unsupported file '{name}': only .csv files can be imported")]
    UnsupportedFile { name: String },

    /// The selected file exceeds the upload ceiling
    #[error("File is too large ({size} bytes): the limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    /// The file contained no header row
    #[error("The file is empty: no headers found")]
    NoHeaders,

    /// The file contained a header row but nothing else
    #[error("The file has headers but no data rows")]
    NoDataRows,

    /// A field is already the target of another column
    #[error("Field '{field}' is already mapped to column '{column}'")]
    FieldAlreadyMapped { field: String, column: String },

    /// A field key that is not part of the schema
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A column that is not part of the parsed document
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A wizard action was requested from a step that does not allow it
    #[error("Cannot {action} from the {step} step")]
    InvalidTransition {
        step: &'static str,
        action: &'static str,
    },

    /// Preview was requested before the identity field was mapped
    #[error("Map a column to Customer Name before previewing")]
    IdentityNotMapped,

    /// The preview produced no importable records
    #[error("Nothing to import: every row is missing a customer name")]
    NothingToImport,

    /// Import request failures (network, status, malformed response)
    #[error("Import failed: {0}")]
    Api(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CscxError {
    /// Create a mapping conflict error
    pub fn already_mapped(field: impl Into<String>, column: impl Into<String>) -> Self {
        Self::FieldAlreadyMapped {
            field: field.into(),
            column: column.into(),
        }
    }

    /// Check if this error rejected the selected file before anything was parsed
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFile { .. } | Self::FileTooLarge { .. } | Self::NoHeaders | Self::NoDataRows
        )
    }

    /// Check if retrying the same action can succeed without re-uploading
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CscxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CscxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ApiError> for CscxError {
    fn from(err: ApiError) -> Self {
        Self::Api(err.to_string())
    }
}

/// Result type alias for cscx-import operations
pub type CscxResult<T> = Result<T, CscxError>;
