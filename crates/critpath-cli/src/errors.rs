//! Error types surfaced by the critpath binary

use crate::input::ParseError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("failed to read task network from {}", path.display())]
    #[diagnostic(
        code(critpath::cli::io),
        help("check that the file exists and is readable, or pass `-` to read stdin")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// Analysis errors other than a cycle, which is reported, not raised.
    #[error("analysis failed")]
    #[diagnostic(
        code(critpath::cli::analysis),
        help("durations along a dependency chain must sum to at most 18446744073709551615")
    )]
    Analysis(#[source] critpath::Error),

    #[error("failed to write report")]
    #[diagnostic(code(critpath::cli::output))]
    Output(#[source] std::io::Error),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) | Self::Analysis(_) => 65,
            Self::Io { .. } | Self::Output(_) => 74,
        }
    }
}
