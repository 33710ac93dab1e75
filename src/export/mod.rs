//! Export module for cscx-import
//!
//! - Template: the empty CSV users fill in before importing
//! - Records: the built record set of a preview, as JSON or YAML

pub mod records;
pub mod template;

pub use records::{export_records_json, export_records_yaml, RecordExport, EXPORT_SCHEMA_VERSION};
pub use template::{template_text, write_template, TEMPLATE_FILE_NAME};
