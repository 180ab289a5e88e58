//! Command Line Interface (CLI) layer for srt2txt.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) that resolves positional arguments into conversion tasks and
//! runs them through the library's batch driver.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
