//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the wizard and services.

pub mod config;
pub mod history;
pub mod import;
pub mod template;

pub use config::handle_config_command;
pub use history::handle_history_command;
pub use import::{handle_import_command, handle_preview_command, ExportFormat, ImportArgs, PreviewArgs};
pub use template::{handle_fields_command, handle_template_command};
