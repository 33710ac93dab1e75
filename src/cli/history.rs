//! CLI command handler for import history

use crate::config::CscxPaths;
use crate::display::format_history;
use crate::error::CscxResult;
use crate::history::HistoryLog;

/// Print the most recent imports
pub fn handle_history_command(paths: &CscxPaths, limit: usize) -> CscxResult<()> {
    let log = HistoryLog::new(paths.history_file());
    let entries = log.read_recent(limit)?;
    println!("{}", format_history(&entries));
    Ok(())
}
