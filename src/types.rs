//! Shared types used across srt2txt.
//! Includes `ConversionTask`, `TaskOutcome`, `ResolveMode` and the default path constants.
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Input file used when no input path is given.
pub const DEFAULT_INPUT: &str = "input.srt";

/// Extension of subtitle files picked up in directory mode (matched case-sensitively).
pub const SUBTITLE_EXTENSION: &str = "srt";

/// Extension given to derived output paths.
pub const TEXT_EXTENSION: &str = "txt";

/// A single resolved (input, output) conversion unit.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ConversionTask {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionTask {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Task converting `input` into its `.txt` sibling.
    pub fn with_text_sibling(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = text_sibling(&input);
        Self { input, output }
    }
}

/// Replace only the final extension of `path` with `.txt`, keeping its directories.
pub fn text_sibling(path: &Path) -> PathBuf {
    path.with_extension(TEXT_EXTENSION)
}

/// Terminal state of a single task.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOutcome {
    Success,
    NotFound,
    ParseFailure,
    IoFailure,
}

impl TaskOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, TaskOutcome::Success)
    }
}

impl std::fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TaskOutcome::Success => "success",
            TaskOutcome::NotFound => "not found",
            TaskOutcome::ParseFailure => "parse failure",
            TaskOutcome::IoFailure => "I/O failure",
        };
        write!(f, "{}", s)
    }
}

/// How the positional arguments were interpreted.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ResolveMode {
    /// No arguments: default input, `.txt` sibling output.
    Default,
    /// One directory argument: every `.srt` file directly inside it.
    Directory(PathBuf),
    /// One `.srt` argument used as the input.
    Input,
    /// One non-`.srt` argument used as the output for the default input.
    Output,
    /// Two or more arguments: explicit input and output.
    Explicit,
}
