//! Import history
//!
//! Completed imports are appended to `history.log` in the data directory as
//! JSON lines.

pub mod entry;
pub mod logger;

pub use entry::HistoryEntry;
pub use logger::HistoryLog;
