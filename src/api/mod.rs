//! High-level library API: convert caption text or files, resolve command-line
//! arguments into conversion tasks, and run task batches with per-task reporting.
//! Prefer these entrypoints over the low-level `core` modules when embedding srt2txt.
use std::path::Path;

use tracing::info;

use crate::core::flatten::join_captions;
use crate::core::srt::{ParseError, parse_captions};
use crate::error::{Error, Result};
use crate::io::{read_subtitles, write_text};
use crate::types::ConversionTask;

pub mod driver;
pub mod resolve;

pub use driver::{BatchReport, DriverOptions, TaskResult, run_tasks};
pub use resolve::{Resolution, resolve_tasks, subtitle_files};

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedText {
    /// Number of captions found in the input
    pub captions: usize,
    pub text: String,
}

impl ConvertedText {
    /// The first `n` characters of the text.
    pub fn head(&self, n: usize) -> &str {
        match self.text.char_indices().nth(n) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// The last `n` characters of the text.
    pub fn tail(&self, n: usize) -> &str {
        let count = self.text.chars().count();
        if count <= n {
            return &self.text;
        }
        match self.text.char_indices().nth(count - n) {
            Some((start, _)) => &self.text[start..],
            None => "",
        }
    }
}

/// Convert the content of an `.srt` file into plain text (no disk I/O)
pub fn convert_str(input: &str) -> std::result::Result<ConvertedText, ParseError> {
    let captions = parse_captions(input)?;
    Ok(ConvertedText {
        captions: captions.len(),
        text: join_captions(&captions),
    })
}

/// Convert `input` into `output`.
///
/// The input is read and parsed before anything is written, so a parse
/// failure leaves no output file behind. Missing parent directories of
/// `output` are created.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConvertedText> {
    let content = read_subtitles(input)?;
    let converted = convert_str(&content).map_err(|source| Error::Parse {
        path: input.to_path_buf(),
        source,
    })?;
    write_text(output, &converted.text)?;
    info!(
        "Converted {:?} -> {:?} ({} captions)",
        input, output, converted.captions
    );
    Ok(converted)
}

/// Run a single resolved task
pub fn convert_task(task: &ConversionTask) -> Result<ConvertedText> {
    convert_file(&task.input, &task.output)
}
