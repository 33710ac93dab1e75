//! Configuration module for cscx-import
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CscxPaths;
pub use settings::Settings;
