//! Path management for cscx-import
//!
//! Provides platform-aware path resolution for configuration, import history,
//! and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `CSCX_IMPORT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/cscx-import` on Linux,
//!    `~/Library/Application Support/cscx-import` on macOS,
//!    `%APPDATA%\cscx-import` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CscxError;

/// Manages all paths used by cscx-import
#[derive(Debug, Clone)]
pub struct CscxPaths {
    /// Base directory for all cscx-import data
    base_dir: PathBuf,
}

impl CscxPaths {
    /// Create a new CscxPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CscxError> {
        let base_dir = if let Ok(custom) = std::env::var("CSCX_IMPORT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CscxPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the import history log
    pub fn history_file(&self) -> PathBuf {
        self.base_dir.join("history.log")
    }

    /// Get the path to the diagnostic log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("cscx-import.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CscxError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CscxError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default data directory path based on platform
fn resolve_default_path() -> Result<PathBuf, CscxError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CscxError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("cscx-import"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CscxPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.history_file(), temp_dir.path().join("history.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("cscx");
        let paths = CscxPaths::with_base_dir(nested.clone());

        assert!(!nested.exists());
        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
