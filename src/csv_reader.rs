use std::fs;
use std::path::Path;
use csv::ReaderBuilder;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use log::debug;

use crate::errors::CsvError;

// @module: Delimited file reading with encoding fallback

// @returns: Candidate encodings, tried in order
// Input files are historically produced by varying tools, so the priority
// list is fixed: utf-8, windows-1252, iso-8859-1, cp1252, latin1. The first
// strict decode that succeeds wins, silently. encoding_rs resolves the
// iso-8859-1/cp1252/latin1 labels to the windows-1252 decoder per the
// WHATWG encoding standard, which matches how those files decode in
// practice.
fn encoding_candidates() -> [(&'static str, &'static Encoding); 5] {
    [
        ("utf-8", UTF_8),
        ("windows-1252", WINDOWS_1252),
        ("iso-8859-1", WINDOWS_1252),
        ("cp1252", WINDOWS_1252),
        ("latin1", WINDOWS_1252),
    ]
}

/// Parsed tabular file: a header row plus the data rows beneath it
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// Column headers from the first row
    pub headers: Vec<String>,

    /// Data rows, cells positional against the header row
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Check whether a column with the given header exists
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// All cell values of the named column, in row order.
    ///
    /// Rows shorter than the header row yield `None` for the missing cells.
    /// Returns `None` when the column does not exist at all.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map(|cell| cell.as_str()))
                .collect(),
        )
    }
}

/// Read a delimited text file into a [`CsvTable`].
///
/// The raw bytes are decoded by trying each candidate encoding strictly in
/// priority order; if none succeeds, one final lenient UTF-8 decode
/// (undecodable bytes replaced) is attempted before giving up on the file.
pub fn read_table(path: &Path, delimiter: u8) -> Result<CsvTable, CsvError> {
    let bytes = fs::read(path).map_err(|e| CsvError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for (label, encoding) in encoding_candidates() {
        if let Some(content) = encoding.decode_without_bom_handling_and_without_replacement(&bytes)
        {
            debug!("Decoded {:?} as {}", path, label);
            return parse_content(path, &content, delimiter);
        }
    }

    // Last resort: lenient UTF-8 with replacement characters
    debug!("Falling back to lenient utf-8 decode for {:?}", path);
    let content = String::from_utf8_lossy(&bytes);
    parse_content(path, &content, delimiter).map_err(|_| CsvError::Encoding {
        path: path.to_path_buf(),
    })
}

// @parses: Decoded content into headers and rows
fn parse_content(path: &Path, content: &str, delimiter: u8) -> Result<CsvTable, CsvError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CsvError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CsvError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(CsvTable { headers, rows })
}
