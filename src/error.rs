//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Separates a missing input file from parse and I/O failures so the batch driver
//! can report each task's outcome without aborting the rest.
use std::path::PathBuf;

use thiserror::Error;

use crate::core::srt::ParseError;
use crate::types::TaskOutcome;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found at '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to process '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Directory input is not supported when an output file is specified: '{}'",
        path.display()
    )]
    DirectoryWithOutput { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Per-task outcome this error is reported as.
    pub fn outcome(&self) -> TaskOutcome {
        match self {
            Error::NotFound { .. } => TaskOutcome::NotFound,
            Error::Parse { .. } => TaskOutcome::ParseFailure,
            Error::Io { .. } | Error::DirectoryWithOutput { .. } => TaskOutcome::IoFailure,
        }
    }
}
