//! Display formatting for terminal output
//!
//! Text renderings of mappings, previews, results and history for the
//! command-line front end.

pub mod mapping;
pub mod preview;
pub mod result;

pub use mapping::{format_field_catalog, format_mapping};
pub use preview::{format_preview_summary, format_warnings};
pub use result::{format_history, format_import_result};
