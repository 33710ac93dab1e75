//! Core data models for cscx-import
//!
//! This module contains the data structures of one import session: the
//! field schema, the parsed document, the column mapping, validation
//! warnings, built records and the server's result.

pub mod document;
pub mod field;
pub mod ids;
pub mod mapping;
pub mod record;
pub mod result;
pub mod schema;
pub mod warning;

pub use document::{ParsedDocument, DISPLAY_ROW_OFFSET};
pub use field::{FieldDefinition, FieldKey, FieldKind, Validator};
pub use ids::SessionId;
pub use mapping::{ColumnAssignment, ColumnMapping, FieldOption};
pub use record::{BuildOutcome, FieldValue, ImportRecord};
pub use result::{ImportResult, RowError};
pub use schema::{Schema, STAGE_VALUES};
pub use warning::{ValidationWarning, WarningKind, WarningSummary};
