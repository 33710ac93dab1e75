//! Dialog overlays

pub mod field_picker;
pub mod help;
