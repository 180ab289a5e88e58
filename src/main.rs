//! srt2txt CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, resolve and run
//! conversion tasks, and exit with the appropriate status.
//! For programmatic use, prefer the library API (`srt2txt::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
