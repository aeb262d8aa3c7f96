use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory scanned for survey export files
    #[serde(default = "default_input_dir")]
    pub input_dir: String,

    /// Path of the generated LaTeX document
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Cell delimiter used by the survey exports
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Survey question columns collected into the report, in section order
    #[serde(default = "default_target_columns")]
    pub target_columns: Vec<String>,

    /// Marker substring whose presence excludes a cell value entirely
    #[serde(default = "default_exclusion_marker")]
    pub exclusion_marker: String,

    /// Whether to run pdflatex after writing the document
    #[serde(default = "default_true")]
    pub compile_pdf: bool,

    /// Report metadata
    #[serde(default)]
    pub report: ReportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Metadata emitted into the report's title block and preamble
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReportConfig {
    // @field: Title on the report's title page
    #[serde(default = "default_report_title")]
    pub title: String,

    // @field: Author on the report's title page
    #[serde(default = "default_report_author")]
    pub author: String,

    // @field: Main babel language of the document
    #[serde(default = "default_report_language")]
    pub language: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_report_title(),
            author: default_report_author(),
            language: default_report_language(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_input_dir() -> String {
    ".".to_string()
}

fn default_output_file() -> String {
    "survey_report.tex".to_string()
}

fn default_delimiter() -> char {
    ';'
}

fn default_target_columns() -> Vec<String> {
    vec![
        "Das war gut:".to_string(),
        "Das würde ich mir noch wünschen:".to_string(),
        "Folgende Themen und Tools fand ich besonders nützlich:".to_string(),
    ]
}

fn default_exclusion_marker() -> String {
    "[BILD]".to_string()
}

fn default_true() -> bool {
    true
}

fn default_report_title() -> String {
    "Seminar Feedback Analyse".to_string()
}

fn default_report_author() -> String {
    "Zidis".to_string()
}

fn default_report_language() -> String {
    "ngerman".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(anyhow!(
                "Delimiter must be a single-byte ASCII character, got '{}'",
                self.delimiter
            ));
        }

        if self.target_columns.is_empty() {
            return Err(anyhow!("At least one target column is required"));
        }

        if !self.output_file.ends_with(".tex") {
            return Err(anyhow!(
                "Output file must have a .tex extension, got '{}'",
                self.output_file
            ));
        }

        if self.report.language.is_empty() {
            return Err(anyhow!("Report language must not be empty"));
        }

        Ok(())
    }

    /// Delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: default_input_dir(),
            output_file: default_output_file(),
            delimiter: default_delimiter(),
            target_columns: default_target_columns(),
            exclusion_marker: default_exclusion_marker(),
            compile_pdf: default_true(),
            report: ReportConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
