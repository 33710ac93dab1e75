//! Delimited-text parser
//!
//! Turns the raw text of an uploaded file into a `ParsedDocument`. The
//! tokenizer is line based: a quoted field may contain commas and doubled
//! quotes but not line breaks. A quote toggles quoting wherever it appears in
//! a field, not only at its start, so `csv::Reader` does not fit here.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{CscxError, CscxResult};
use crate::models::ParsedDocument;

/// Largest file accepted for import (5 MiB)
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

const BOM: char = '\u{feff}';

/// Parse CSV text into headers and rows
///
/// Lines are split on `\n` with a trailing `\r` removed; lines that are blank
/// after trimming are dropped. The first remaining line is the header row.
pub fn parse(text: &str) -> ParsedDocument {
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let headers = match lines.next() {
        Some(line) => split_line(line),
        None => return ParsedDocument::default(),
    };
    let rows: Vec<Vec<String>> = lines.map(split_line).collect();

    debug!(columns = headers.len(), rows = rows.len(), "Parsed CSV text");
    ParsedDocument::new(headers, rows)
}

/// Split one line into trimmed fields
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Reject files whose name does not end in `.csv` (any case)
pub fn check_file_name(name: &str) -> CscxResult<()> {
    let is_csv = Path::new(name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        Ok(())
    } else {
        Err(CscxError::UnsupportedFile {
            name: name.to_string(),
        })
    }
}

/// Reject files larger than `MAX_FILE_BYTES`
pub fn check_file_size(size: u64) -> CscxResult<()> {
    if size > MAX_FILE_BYTES {
        Err(CscxError::FileTooLarge {
            size,
            limit: MAX_FILE_BYTES,
        })
    } else {
        Ok(())
    }
}

/// Check and parse an uploaded file
///
/// Name and size are checked before the text is looked at. A file without a
/// header row, or with headers but no data, is rejected.
pub fn parse_upload(name: &str, size: u64, text: &str) -> CscxResult<ParsedDocument> {
    check_file_name(name)?;
    check_file_size(size)?;

    let doc = parse(text.strip_prefix(BOM).unwrap_or(text));
    if doc.is_empty() {
        return Err(CscxError::NoHeaders);
    }
    if doc.row_count() == 0 {
        return Err(CscxError::NoDataRows);
    }

    Ok(doc)
}

/// A file read from disk, ready for `parse_upload`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// File name without directories
    pub name: String,
    /// Size in bytes as reported by the filesystem
    pub size: u64,
    /// Decoded contents
    pub text: String,
}

impl Upload {
    /// Parse the contents
    pub fn parse(&self) -> CscxResult<ParsedDocument> {
        parse_upload(&self.name, self.size, &self.text)
    }
}

/// Read a file for import
///
/// The name and size are checked from metadata before any content is read.
/// Content is decoded as UTF-8; invalid sequences are replaced and a leading
/// byte-order mark is removed.
pub async fn read_upload(path: &Path) -> CscxResult<Upload> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    check_file_name(&name)?;
    let size = tokio::fs::metadata(path).await?.len();
    check_file_size(size)?;

    let bytes = tokio::fs::read(path).await?;
    let decoded = String::from_utf8_lossy(&bytes);
    let text = decoded.strip_prefix(BOM).unwrap_or(&decoded).to_string();

    info!(file = %name, bytes = size, "Read upload");
    Ok(Upload { name, size, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_parse_simple() {
        let doc = parse("Name,ARR\nAcme,1000\nGlobex,2000\n");
        assert_eq!(doc.headers, vec!["Name", "ARR"]);
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.rows[1], vec!["Globex", "2000"]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let doc = parse("Name,Note\n\"Acme, Inc\",\"She said \"\"hi\"\"\"\n");
        assert_eq!(doc.rows[0], vec!["Acme, Inc", "She said \"hi\""]);
    }

    #[test]
    fn test_parse_quote_toggles_mid_field() {
        let doc = parse("Note\na\"b,c\"d\n");
        assert_eq!(doc.rows[0], vec!["ab,cd"]);

        // A csv::Reader keeps mid-field quotes literal and splits the comma
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a\"b,c\"d".as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.iter().collect::<Vec<_>>(), vec!["a\"b", "c\"d"]);
    }

    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let doc = parse("Name,ARR\r\n\r\nAcme,10\r\n   \r\nGlobex,20\r\n");
        assert_eq!(doc.headers, vec!["Name", "ARR"]);
        assert_eq!(doc.rows, vec![vec!["Acme", "10"], vec!["Globex", "20"]]);
    }

    #[test]
    fn test_parse_trims_fields() {
        let doc = parse("  Name , ARR \n  Acme ,  $1,000 \n");
        assert_eq!(doc.headers, vec!["Name", "ARR"]);
        // The unquoted comma splits the amount
        assert_eq!(doc.rows[0], vec!["Acme", "$1", "000"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), ParsedDocument::default());
        assert_eq!(parse("\n\n  \n"), ParsedDocument::default());
    }

    #[test]
    fn test_parse_reads_csv_writer_output() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(["name", "industry"]).unwrap();
        writer.write_record(["Acme, Inc", "Software"]).unwrap();
        writer.write_record(["The \"Best\" Co", "Retail"]).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let doc = parse(&text);
        assert_eq!(doc.headers, vec!["name", "industry"]);
        assert_eq!(doc.rows[0], vec!["Acme, Inc", "Software"]);
        assert_eq!(doc.rows[1], vec!["The \"Best\" Co", "Retail"]);
    }

    #[test]
    fn test_check_file_name() {
        assert!(check_file_name("customers.csv").is_ok());
        assert!(check_file_name("CUSTOMERS.CSV").is_ok());
        assert!(matches!(
            check_file_name("customers.xlsx"),
            Err(CscxError::UnsupportedFile { .. })
        ));
        assert!(check_file_name("csv").is_err());
    }

    #[test]
    fn test_check_file_size() {
        assert!(check_file_size(MAX_FILE_BYTES).is_ok());
        assert!(matches!(
            check_file_size(MAX_FILE_BYTES + 1),
            Err(CscxError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_parse_upload_rejections() {
        assert!(matches!(
            parse_upload("a.csv", 0, ""),
            Err(CscxError::NoHeaders)
        ));
        assert!(matches!(
            parse_upload("a.csv", 10, "Name,ARR\n"),
            Err(CscxError::NoDataRows)
        ));
        // Size is checked before the text
        assert!(matches!(
            parse_upload("a.csv", MAX_FILE_BYTES + 1, "Name\nAcme"),
            Err(CscxError::FileTooLarge { .. })
        ));
    }

    #[tokio::test]
    async fn test_read_upload_strips_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("customers.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all("\u{feff}Name,ARR\nAcme,10\n".as_bytes()).unwrap();

        let upload = read_upload(&path).await.unwrap();
        assert_eq!(upload.name, "customers.csv");
        let doc = upload.parse().unwrap();
        assert_eq!(doc.headers, vec!["Name", "ARR"]);
    }

    #[tokio::test]
    async fn test_read_upload_rejects_extension_before_reading() {
        // The file does not exist; the name check must fail first
        let err = read_upload(Path::new("/nonexistent/customers.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, CscxError::UnsupportedFile { .. }));
    }
}
