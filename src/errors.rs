/*!
 * Error types for the surveytex application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading tabular input files
#[derive(Error, Debug)]
pub enum CsvError {
    /// Error reading the file from disk
    #[error("Failed to read file {path:?}: {message}")]
    Io {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// Error when no candidate encoding could decode the file
    #[error("Could not decode {path:?} with any supported encoding")]
    Encoding {
        /// Path of the undecodable file
        path: PathBuf,
    },

    /// Error when parsing the decoded content as delimited data fails
    #[error("Failed to parse {path:?}: {message}")]
    Parse {
        /// Path of the unparseable file
        path: PathBuf,
        /// Underlying parser error message
        message: String,
    },
}

/// Errors that can occur while assembling or writing the report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error writing the generated document to disk
    #[error("Failed to write report to {path:?}: {message}")]
    Write {
        /// Target path of the report
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from reading tabular input
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Error from report assembly or output
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
