//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ffk_model::InputSpec;

#[derive(Parser)]
#[command(
    name = "ffk-usage",
    version,
    about = "FFK usage analysis - room usage hours from booking and calendar exports",
    long_about = "Aggregate room usage hours per category from the venue booking export \
                  and the calendar export.\n\n\
                  Writes a console summary plus Markdown and CSV reports per year."
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

    /// JSON file replacing the built-in analysis configuration.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyse the venue booking export.
    Bookings(RunArgs),

    /// Analyse the calendar export.
    Calendar(RunArgs),

    /// Print the active filter criteria of both analyses.
    Criteria,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Directory the configured input files are resolved against.
    #[arg(long = "input-dir", value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory for the Markdown and CSV reports.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Input file as FILE:YEAR[:ENCODING]; replaces the configured inputs.
    #[arg(long = "input", value_name = "SPEC")]
    pub inputs: Vec<InputSpec>,

    /// Print the console report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
