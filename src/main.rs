// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod sanitizer;
mod csv_reader;
mod aggregator;
mod latex_builder;
mod renderer;
mod file_utils;
mod app_controller;
mod errors;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the survey feedback report (default command)
    Report(ReportArgs),

    /// Generate shell completions for surveytex
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ReportArgs {
    /// Directory containing the survey CSV exports
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<String>,

    /// Path of the generated LaTeX document
    #[arg(short, long)]
    output_file: Option<String>,

    /// Skip the pdflatex compilation step
    #[arg(short = 'n', long)]
    no_compile: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// surveytex - Survey feedback to LaTeX reports
///
/// Aggregates free-text survey responses from CSV exports into a single
/// typeset PDF report with one section per survey question.
#[derive(Parser, Debug)]
#[command(name = "surveytex")]
#[command(version = "1.0.0")]
#[command(about = "Survey feedback report generator")]
#[command(long_about = "surveytex reads semicolon-delimited survey exports, sanitizes the
free-text answers for LaTeX, groups them by survey question and produces a
typeset report with source attribution for every response.

EXAMPLES:
    surveytex                                  # Process the current directory
    surveytex ./exports                        # Process a specific directory
    surveytex -o feedback.tex ./exports        # Custom output document
    surveytex -n ./exports                     # Skip the pdflatex step
    surveytex --log-level debug ./exports      # Verbose processing output
    surveytex completions bash > surveytex.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory containing the survey CSV exports
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<String>,

    /// Path of the generated LaTeX document
    #[arg(short, long)]
    output_file: Option<String>,

    /// Skip the pdflatex compilation step
    #[arg(short = 'n', long)]
    no_compile: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "surveytex", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Report(args)) => run_report(args),
        None => {
            // Default behavior - use top-level args so plain `surveytex .`
            // keeps working without the subcommand
            let report_args = ReportArgs {
                input_dir: cli.input_dir,
                output_file: cli.output_file,
                no_compile: cli.no_compile,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_report(report_args)
        }
    }
}

fn run_report(options: ReportArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader::<_, Config>(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(input_dir) = &options.input_dir {
        config.input_dir = input_dir.clone();
    }

    if let Some(output_file) = &options.output_file {
        config.output_file = output_file.clone();
    }

    if options.no_compile {
        config.compile_pdf = false;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Create and run the controller; validation happens inside with_config
    let controller = Controller::with_config(config)?;
    controller.run()
}
