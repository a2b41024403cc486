//! CLI argument definitions for the litlake pipeline driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use litlake_model::AreaKind;

#[derive(Parser)]
#[command(
    name = "litlake",
    version,
    about = "Medallion data pipeline - drug mentions in clinical publications",
    long_about = "Run the raw -> refined -> optimized -> business pipeline over a data\n\
                  root, validating each dataset against its schema and keeping rejected\n\
                  rows alongside the accepted output, then derive the publication\n\
                  lineage graph from the business mention table."
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
    /// Run the dataset jobs and report accept/reject counts.
    Pipeline(PipelineArgs),

    /// Build the lineage graph from the business mention output.
    Graph(GraphArgs),

    /// List the registered dataset jobs.
    Datasets,
}

#[derive(Parser)]
pub struct PipelineArgs {
    /// Data root holding the raw area; outputs land beneath it.
    #[arg(value_name = "DATA_ROOT")]
    pub data_root: PathBuf,

    /// Run only the jobs targeting one area.
    #[arg(long = "area", value_enum)]
    pub area: Option<AreaArg>,
}

#[derive(Parser)]
pub struct GraphArgs {
    /// Data root holding the business mention output.
    #[arg(value_name = "DATA_ROOT")]
    pub data_root: PathBuf,

    /// Where to write the flattened JSON (default: <DATA_ROOT>/flat_result.json).
    #[arg(long = "json-out", value_name = "PATH")]
    pub json_out: Option<PathBuf>,

    /// Where to write the DOT rendering (default: <DATA_ROOT>/graph.dot).
    #[arg(long = "dot-out", value_name = "PATH")]
    pub dot_out: Option<PathBuf>,
}

/// Area choices for `pipeline --area`.
#[derive(Clone, Copy, ValueEnum)]
pub enum AreaArg {
    Refined,
    Optimized,
    Business,
}

impl From<AreaArg> for AreaKind {
    fn from(area: AreaArg) -> Self {
        match area {
            AreaArg::Refined => AreaKind::Refined,
            AreaArg::Optimized => AreaKind::Optimized,
            AreaArg::Business => AreaKind::Business,
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
