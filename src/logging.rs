//! Logging setup
//!
//! Log lines go to `cscx-import.log` in the data directory so they never
//! draw over the terminal UI.
//!
//! # Environment
//! - `RUST_LOG`: filter override (default: the `log_level` setting),
//!   e.g. `RUST_LOG=cscx_import=debug`

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{CscxPaths, Settings};
use crate::error::{CscxError, CscxResult};

/// Install the global subscriber, appending to the log file
pub fn init(paths: &CscxPaths, settings: &Settings) -> CscxResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| CscxError::Io(format!("Failed to open log file: {}", e)))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| CscxError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Install a debug-level subscriber that writes through the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
