//! User settings for cscx-import
//!
//! Manages where imports are sent (API base URL and workspace), request
//! timeouts, and the default log level.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::CscxPaths;
use crate::error::CscxError;

/// User settings for cscx-import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the customer-success API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Workspace that owns imported customers
    #[serde(default = "default_workspace_id")]
    pub workspace_id: String,

    /// Import request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_workspace_id() -> String {
    "default".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            workspace_id: default_workspace_id(),
            request_timeout_secs: default_request_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CscxPaths) -> Result<Self, CscxError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CscxError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CscxError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CscxPaths) -> Result<(), CscxError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CscxError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CscxError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Apply command-line or environment overrides without persisting them
    pub fn with_overrides(mut self, api_url: Option<String>, workspace: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        if let Some(workspace) = workspace {
            self.workspace_id = workspace;
        }
        self
    }

    /// Import request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:3001");
        assert_eq!(settings.workspace_id, "default");
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CscxPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_base_url = "https://api.example.com".into();
        settings.workspace_id = "acme-cs".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"workspace_id":"ws-1"}"#).unwrap();
        assert_eq!(settings.workspace_id, "ws-1");
        assert_eq!(settings.api_base_url, "http://localhost:3001");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(Some("http://x".into()), None);
        assert_eq!(settings.api_base_url, "http://x");
        assert_eq!(settings.workspace_id, "default");
    }
}
