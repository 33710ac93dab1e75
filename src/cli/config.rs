//! CLI command handler for configuration

use crate::config::{CscxPaths, Settings};
use crate::error::CscxResult;

/// Show paths and settings, persisting any new values first
pub fn handle_config_command(
    paths: &CscxPaths,
    mut settings: Settings,
    api_url: Option<String>,
    workspace: Option<String>,
) -> CscxResult<()> {
    if api_url.is_some() || workspace.is_some() {
        settings = settings.with_overrides(api_url, workspace);
        settings.save(paths)?;
        println!("Settings saved.");
        println!();
    }

    println!("cscx-import Configuration");
    println!("=========================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("History file:   {}", paths.history_file().display());
    println!("Log file:       {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  API base URL:     {}", settings.api_base_url);
    println!("  Workspace:        {}", settings.workspace_id);
    println!("  Request timeout:  {}s", settings.request_timeout_secs);
    println!("  Log level:        {}", settings.log_level);

    Ok(())
}
