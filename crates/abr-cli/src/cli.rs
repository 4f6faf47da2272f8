//! CLI argument definitions for the Business Report toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "abr",
    version,
    about = "Business Report toolkit - clean, segment, and summarize seller exports",
    long_about = "Normalize Seller Central Business Report CSV exports.\n\n\
                  Produces a cleaned CSV with canonical columns and derived metrics,\n\
                  a Markdown analysis report, and a machine-readable quality report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Clean a report export and write CSV, Markdown, and quality outputs.
    Clean(CleanArgs),

    /// Print headline statistics for a report export.
    Summary(SummaryArgs),

    /// Print the performance-quadrant breakdown for a report export.
    Segment(SegmentArgs),

    /// List the canonical output columns and their source headers.
    Columns,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the Business Report CSV export.
    #[arg(value_name = "REPORT_CSV")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <input dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Currency symbol stripped from monetary columns.
    #[arg(long = "currency-symbol", default_value = "£")]
    pub currency_symbol: String,

    /// Number of products in each top-N report table.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top_n: usize,

    /// Percentile (0-100) separating high from low traffic and conversion.
    #[arg(long = "percentile", default_value_t = 70.0)]
    pub percentile: f64,

    /// Analyze and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Path to the Business Report CSV export.
    #[arg(value_name = "REPORT_CSV")]
    pub input: PathBuf,

    /// Currency symbol stripped from monetary columns.
    #[arg(long = "currency-symbol", default_value = "£")]
    pub currency_symbol: String,

    /// Number of products in each top-N table.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top_n: usize,
}

#[derive(Parser)]
pub struct SegmentArgs {
    /// Path to the Business Report CSV export.
    #[arg(value_name = "REPORT_CSV")]
    pub input: PathBuf,

    /// Currency symbol stripped from monetary columns.
    #[arg(long = "currency-symbol", default_value = "£")]
    pub currency_symbol: String,

    /// Percentile (0-100) separating high from low traffic and conversion.
    #[arg(long = "percentile", default_value_t = 70.0)]
    pub percentile: f64,
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
