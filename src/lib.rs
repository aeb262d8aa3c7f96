/*!
 * # surveytex - Survey feedback to LaTeX reports
 *
 * A Rust library for aggregating free-text survey responses from CSV
 * exports into a single typeset report.
 *
 * ## Features
 *
 * - Read semicolon-delimited survey exports with encoding fallback
 *   (utf-8, windows-1252, iso-8859-1, cp1252, latin1)
 * - Sanitize responses for safe LaTeX embedding (reserved characters,
 *   German umlauts, sharp s)
 * - Group responses by survey question across all input files, with
 *   source attribution per response
 * - Emit a structured LaTeX document with title page, table of contents
 *   and one section per question
 * - Invoke pdflatex twice to resolve the table of contents
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `sanitizer`: LaTeX escaping and cell-value classification
 * - `csv_reader`: Delimited file reading with encoding fallback
 * - `aggregator`: Response collection across files
 * - `latex_builder`: Report document assembly
 * - `renderer`: External pdflatex invocation
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod sanitizer;
pub mod csv_reader;
pub mod aggregator;
pub mod latex_builder;
pub mod renderer;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use aggregator::{Aggregation, CommentRecord};
pub use csv_reader::CsvTable;
pub use sanitizer::CellOutcome;
pub use errors::{AppError, CsvError, ReportError};
