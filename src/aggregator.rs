use std::collections::HashMap;
use std::path::{Path, PathBuf};
use anyhow::Result;
use log::{warn, info};

use crate::csv_reader;
use crate::file_utils::FileManager;
use crate::sanitizer;

// @module: Response collection across survey export files

/// One sanitized survey response with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    // @field: Escaped response text
    pub comment: String,

    // @field: Stem of the file the response came from
    pub source: String,
}

/// All responses grouped by survey question, plus the processing tally
#[derive(Debug, Default)]
pub struct Aggregation {
    /// Responses keyed by target column name, in file-then-row order
    pub buckets: HashMap<String, Vec<CommentRecord>>,

    /// Count of files that parsed without error, matching columns or not
    pub processed_files: usize,
}

impl Aggregation {
    /// Responses collected for one target column, empty slice if none
    pub fn bucket(&self, column: &str) -> &[CommentRecord] {
        self.buckets.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of collected responses across all buckets
    pub fn total_responses(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Discover survey export files in a directory, sorted for deterministic
/// processing order
pub fn find_csv_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    FileManager::find_files(dir, "csv")
}

/// Collect and sanitize all responses for the target columns.
///
/// Per-file failures are not fatal: a file that cannot be decoded or parsed
/// is logged and skipped, and the run continues with the remaining files.
/// A file missing a target column gets a warning and simply contributes
/// nothing to that bucket.
pub fn aggregate(
    files: &[PathBuf],
    target_columns: &[String],
    delimiter: u8,
    exclusion_marker: &str,
) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for file in files {
        let table = match csv_reader::read_table(file, delimiter) {
            Ok(table) => table,
            Err(e) => {
                warn!("Error processing {:?}: {}", file, e);
                continue;
            }
        };

        let source = FileManager::file_stem(file);
        info!("Processing: {}", source);

        for column in target_columns {
            let Some(values) = table.column(column) else {
                warn!("Column '{}' not found in {:?}", column, file);
                continue;
            };

            for value in values {
                if let Some(cleaned) = sanitizer::clean(value, exclusion_marker) {
                    aggregation
                        .buckets
                        .entry(column.clone())
                        .or_default()
                        .push(CommentRecord {
                            comment: cleaned,
                            source: source.clone(),
                        });
                }
            }
        }

        aggregation.processed_files += 1;
    }

    aggregation
}
