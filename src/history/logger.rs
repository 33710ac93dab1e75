//! Append-only import history
//!
//! Each completed import is written as a single JSON line and flushed
//! immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{CscxError, CscxResult};

use super::entry::HistoryEntry;

/// Reads and writes the JSONL history file
pub struct HistoryLog {
    log_path: PathBuf,
}

impl HistoryLog {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry
    pub fn append(&self, entry: &HistoryEntry) -> CscxResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| CscxError::Io(format!("Failed to open history log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| CscxError::Json(format!("Failed to serialize history entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| CscxError::Io(format!("Failed to write history entry: {}", e)))?;

        file.flush()
            .map_err(|e| CscxError::Io(format!("Failed to flush history log: {}", e)))?;

        Ok(())
    }

    /// All entries, oldest first
    pub fn read_all(&self) -> CscxResult<Vec<HistoryEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| CscxError::Io(format!("Failed to open history log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                CscxError::Io(format!("Failed to read history line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: HistoryEntry = serde_json::from_str(&line).map_err(|e| {
                CscxError::Json(format!(
                    "Failed to parse history entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> CscxResult<Vec<HistoryEntry>> {
        let mut all = self.read_all()?;
        let start = all.len().saturating_sub(count);
        Ok(all.split_off(start))
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImportResult, SessionId};
    use tempfile::TempDir;

    fn entry(file: &str, imported: usize) -> HistoryEntry {
        let result = ImportResult {
            imported,
            ..Default::default()
        };
        HistoryEntry::from_import(SessionId::new(), file, "default", imported, &result)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("history.log"));
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_read_recent() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("history.log"));

        log.append(&entry("a.csv", 1)).unwrap();
        log.append(&entry("b.csv", 2)).unwrap();
        log.append(&entry("c.csv", 3)).unwrap();

        let recent = log.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].file_name, "b.csv");
        assert_eq!(recent[1].imported, 3);
        assert_eq!(log.read_all().unwrap().len(), 3);
    }

    #[test]
    fn test_corrupt_line_reports_position() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.log");
        std::fs::write(&path, "{not json}\n").unwrap();

        let err = HistoryLog::new(path).read_all().unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
