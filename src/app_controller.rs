use anyhow::{Result, Context};
use log::{warn, info};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::aggregator::{self, Aggregation};
use crate::app_config::Config;
use crate::errors::ReportError;
use crate::file_utils::FileManager;
use crate::latex_builder;
use crate::renderer;

// @module: Application controller for report generation

/// Main application controller driving the report pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.target_columns.is_empty() && !self.config.output_file.is_empty()
    }

    /// Run the full pipeline: discover, aggregate, build, write, compile.
    ///
    /// An empty input directory ends the run without producing a document.
    /// A compile failure is non-fatal - the document file already exists at
    /// that point and the user is told how to compile it manually.
    pub fn run(&self) -> Result<()> {
        let start_time = std::time::Instant::now();
        let input_dir = Path::new(&self.config.input_dir);

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow::anyhow!(
                "Input directory does not exist: {:?}",
                input_dir
            ));
        }

        let files = aggregator::find_csv_files(input_dir)?;
        if files.is_empty() {
            info!("No CSV files found in {:?}", input_dir);
            return Ok(());
        }

        let aggregation = self.aggregate_with_progress(&files);

        info!(
            "Collected {} responses from {} of {} files",
            aggregation.total_responses(),
            aggregation.processed_files,
            files.len()
        );

        let document = latex_builder::build_report(
            &aggregation,
            &self.config.target_columns,
            &self.config.report,
        );

        let output_path = PathBuf::from(&self.config.output_file);
        FileManager::write_to_file(&output_path, &document).map_err(|e| ReportError::Write {
            path: output_path.clone(),
            message: e.to_string(),
        })?;

        info!("LaTeX document generated successfully: {:?}", output_path);
        info!("Processed {} CSV files", aggregation.processed_files);

        if self.config.compile_pdf {
            if renderer::compile_pdf(&output_path) {
                info!("Report generation and compilation completed successfully!");
            } else {
                warn!("LaTeX file generated, but PDF compilation failed.");
                warn!(
                    "You can manually compile with: pdflatex {}",
                    output_path.display()
                );
            }
        }

        info!(
            "Finished in {}.",
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    // @aggregates: All discovered files, with a progress bar over them
    fn aggregate_with_progress(&self, files: &[PathBuf]) -> Aggregation {
        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        // Aggregation itself stays sequential so report ordering within a
        // category follows sorted file order
        let mut aggregation = Aggregation::default();
        for file in files {
            progress.set_message(FileManager::file_stem(file));
            let partial = aggregator::aggregate(
                std::slice::from_ref(file),
                &self.config.target_columns,
                self.config.delimiter_byte(),
                &self.config.exclusion_marker,
            );
            for (column, mut records) in partial.buckets {
                aggregation.buckets.entry(column).or_default().append(&mut records);
            }
            aggregation.processed_files += partial.processed_files;
            progress.inc(1);
        }
        progress.finish_and_clear();

        aggregation
    }

    /// Format a duration as a human readable string
    fn format_duration(duration: std::time::Duration) -> String {
        let total_secs = duration.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
