use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::CommandFactory;
use tracing::info;
use tracing_subscriber::EnvFilter;

use srt2txt::api::{BatchReport, DriverOptions, resolve_tasks, run_tasks};
use srt2txt::io::write_text;
use srt2txt::types::ResolveMode;

use super::args::CliArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_report(path: &Path, report: &BatchReport) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(report)?;
    write_text(path, &json)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if args.wants_help() {
        CliArgs::command().print_long_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    if args.log {
        init_logging();
    }

    let resolution = match resolve_tasks(&args.files) {
        Ok(resolution) => resolution,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if let ResolveMode::Directory(dir) = &resolution.mode {
        println!("Directory mode activated for: {}", dir.display());
        if resolution.tasks.is_empty() {
            println!("No .srt files found in '{}'.", dir.display());
        }
    }

    if !resolution.ignored.is_empty() {
        let extra: Vec<String> = resolution
            .ignored
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        eprintln!(
            "Warning: Extra arguments [{}] are ignored in two-argument mode.",
            extra.join(", ")
        );
    }

    if resolution.tasks.is_empty() {
        return Ok(ExitCode::FAILURE);
    }

    let options = DriverOptions {
        preview: args.preview,
        ..DriverOptions::default()
    };
    let report = run_tasks(
        &resolution.tasks,
        &options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    if let Some(path) = &args.report {
        match write_report(path, &report) {
            Ok(()) => info!("Report written to {:?}", path),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    if args.strict && report.failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
