//! Service layer for cscx-import
//!
//! The import pipeline as plain functions: parse the upload, infer a
//! mapping, validate and build records. Every function takes the schema
//! explicitly and none of them keep state.

pub mod builder;
pub mod mapping;
pub mod parser;
pub mod validation;

pub use builder::{build, duplicate_identities, DuplicateIdentity};
pub use mapping::{apply_overrides, auto_map, MappingOverride};
pub use parser::{
    check_file_name, check_file_size, parse, parse_upload, read_upload, Upload, MAX_FILE_BYTES,
};
pub use validation::{summarize, validate};
