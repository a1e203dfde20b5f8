//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use normstat_model::OutputFormat;

#[derive(Parser)]
#[command(
    name = "normstat",
    version,
    about = "Classify worksheet columns and report descriptive statistics",
    long_about = "Classify every column of a worksheet and report descriptive statistics.\n\n\
                  Continuous numeric columns are tested for normality (Shapiro-Wilk) and\n\
                  summarized by mean/std dev or median/min-max; numeric columns with few\n\
                  distinct values get counts and percentages; text columns are labeled."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze one sheet and save the report.
    Analyze(AnalyzeArgs),

    /// List the sheets of a workbook.
    Sheets(SheetsArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// CSV file, or a directory whose CSV files are the sheets.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Sheet to analyze (prompted for when the workbook has several).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Report destination (prompted for when omitted).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format (default: from the destination extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Do not print the report table after saving.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct SheetsArgs {
    /// CSV file, or a directory whose CSV files are the sheets.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
