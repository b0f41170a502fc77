// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use crate::app_config::Config;
use app_controller::Controller;
use logging::CustomLogger;

mod app_config;
mod app_controller;
mod errors;
mod logging;
mod providers;
mod sheet;
mod sheet_io;
mod translation;

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

/// sheetlate - spreadsheet column translation
///
/// Reads one sheet of a workbook, translates the selected text columns
/// through a remote translation service, and writes the result as CSV.
#[derive(Parser, Debug)]
#[command(name = "sheetlate")]
#[command(version = "0.1.0")]
#[command(about = "Translate selected spreadsheet columns")]
#[command(long_about = "sheetlate translates selected text columns of a spreadsheet using a
LibreTranslate-compatible service, with caching, retries, and request throttling.

EXAMPLES:
    sheetlate report.xlsx                          # Pick sheet and columns interactively
    sheetlate --sheet 2 --columns 1,3 report.xlsx  # Non-interactive selection
    sheetlate -s zh-CN -t en report.xlsx           # Override the language pair
    sheetlate -o out report.xlsx                   # Write output under ./out
    sheetlate --log-level debug report.xlsx        # Verbose logging

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    /// Input workbook to process (.xlsx, .xls, or .ods)
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Sheet to translate, as a 1-based number or name (prompted when omitted)
    #[arg(long)]
    sheet: Option<String>,

    /// Columns to translate, comma-separated 1-based numbers or names (prompted when omitted)
    #[arg(long)]
    columns: Option<String>,

    /// Output directory for translated sheets
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Source language code (e.g., 'zh-CN', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'es')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let mut config = Config::from_file_or_default(&cli.config_path)?;

    // Command line arguments take precedence over the config file
    if let Some(source_language) = cli.source_language {
        config.source_language = source_language;
    }
    if let Some(target_language) = cli.target_language {
        config.target_language = target_language;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    config.validate()?;

    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::new(config);
    controller.run(&cli.input_path, cli.sheet, cli.columns).await?;

    Ok(())
}
