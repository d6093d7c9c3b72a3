use crate::tracing::{LogLevel, TracingFormat};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report formats written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated table, one row per task
    Table,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "critpath")]
#[command(about = "Compute earliest/latest times, slack and the critical path of a task network")]
#[command(
    long_about = "Reads `n m`, then m edges `u v w` (1-based, weight ignored), then n durations. \
                  Without an input argument the built-in ten-task sample is analysed."
)]
#[command(version)]
pub struct Cli {
    /// Task network file, or `-` to read stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[arg(
        long,
        env = "CRITPATH_FORMAT",
        help = "Report format",
        default_value = "table",
        value_enum
    )]
    pub format: OutputFormat,

    #[arg(long, help = "Print the parsed edges before the report")]
    pub print_graph: bool,

    #[arg(
        short = 'l',
        long,
        env = "CRITPATH_LOG_LEVEL",
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        env = "CRITPATH_LOG_FORMAT",
        help = "Log output format",
        default_value = "compact",
        value_enum
    )]
    pub log_format: TracingFormat,
}

/// Where the task network is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Sample,
    Stdin,
    File(PathBuf),
}

impl Cli {
    pub fn source(&self) -> InputSource {
        match &self.input {
            None => InputSource::Sample,
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path.clone()),
        }
    }
}
