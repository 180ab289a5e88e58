//! Sequential batch driver: runs resolved tasks one at a time, prints
//! progress to `out` and failures to `err`, and tallies the outcomes.
//! A failing task never stops the tasks after it.
use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

use super::{ConvertedText, convert_task};
use crate::types::{ConversionTask, TaskOutcome};

/// Width of the dashed line printed around each task
pub const SEPARATOR_WIDTH: usize = 55;

/// Characters shown at each end of the content preview
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Copy)]
pub struct DriverOptions {
    /// Print the beginning and end of each converted text
    pub preview: bool,
    pub preview_chars: usize,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            preview: false,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskResult {
    #[serde(flatten)]
    pub task: ConversionTask,
    pub outcome: TaskOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<TaskResult>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    fn record(&mut self, task: &ConversionTask, outcome: TaskOutcome, message: Option<String>) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(TaskResult {
            task: task.clone(),
            outcome,
            message,
        });
    }
}

fn write_preview(out: &mut dyn Write, converted: &ConvertedText, chars: usize) -> io::Result<()> {
    writeln!(out, "--- Content Preview ---")?;
    writeln!(out, "First {} characters:", chars)?;
    writeln!(out, "{}...", converted.head(chars))?;
    writeln!(out, "Last {} characters:", chars)?;
    writeln!(out, "... {}", converted.tail(chars))
}

/// Run every task in order and return the tally.
///
/// Only failures to write progress to `out` or `err` are returned as errors;
/// conversion failures are recorded in the report.
pub fn run_tasks(
    tasks: &[ConversionTask],
    options: &DriverOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<BatchReport> {
    let total = tasks.len();
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut report = BatchReport::default();

    writeln!(out, "{}", separator)?;
    for (i, task) in tasks.iter().enumerate() {
        if total > 1 {
            writeln!(out, "Processing task {} of {}...", i + 1, total)?;
        }

        match convert_task(task) {
            Ok(converted) => {
                writeln!(
                    out,
                    "Conversion successful! Content saved to: {}",
                    task.output.display()
                )?;
                if options.preview {
                    write_preview(out, &converted, options.preview_chars)?;
                }
                report.record(task, TaskOutcome::Success, None);
            }
            Err(e) => {
                warn!("Task {} of {} failed: {}", i + 1, total, e);
                writeln!(err, "Error: {}", e)?;
                report.record(task, e.outcome(), Some(e.to_string()));
            }
        }
        writeln!(out, "{}", separator)?;
    }

    if total > 1 {
        writeln!(out, "All tasks completed!")?;
        writeln!(
            out,
            "Summary: {} succeeded, {} failed.",
            report.succeeded, report.failed
        )?;
    }

    Ok(report)
}
