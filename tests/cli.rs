//! End-to-end tests that run the compiled `srt2txt` binary in a scratch directory.
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SAMPLE: &str = "1\n00:00:01,000 --> 00:00:03,000\nIt was a bright cold day\nin April,\n\n2\n00:00:03,500 --> 00:00:05,000\nand the clocks were striking thirteen.\n";
const EXPECTED: &str = "It was a bright cold day in April, and the clocks were striking thirteen.";

fn srt2txt(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_srt2txt"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run srt2txt")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn default_input_converts_to_default_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.srt"), SAMPLE).unwrap();

    let output = srt2txt(dir.path(), &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Conversion successful!"));
    assert_eq!(
        fs::read_to_string(dir.path().join("input.txt")).unwrap(),
        EXPECTED
    );
}

#[test]
fn missing_default_input_reports_but_exits_zero() {
    let dir = TempDir::new().unwrap();

    let output = srt2txt(dir.path(), &[]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Input file not found"));
    assert!(!dir.path().join("input.txt").exists());

    let output = srt2txt(dir.path(), &["--strict"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn non_srt_argument_names_the_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.srt"), SAMPLE).unwrap();

    let output = srt2txt(dir.path(), &["summary.txt"]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("summary.txt")).unwrap(),
        EXPECTED
    );
    assert!(!dir.path().join("input.txt").exists());
}

#[test]
fn explicit_pair_creates_parent_directories_and_warns_on_extras() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("talk.SRT"), SAMPLE).unwrap();

    let output = srt2txt(dir.path(), &["talk.SRT", "out/notes.md", "extra"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Warning: Extra arguments [extra]"));
    assert_eq!(
        fs::read_to_string(dir.path().join("out/notes.md")).unwrap(),
        EXPECTED
    );
}

#[test]
fn directory_mode_runs_every_file_and_summarises() {
    let dir = TempDir::new().unwrap();
    let subs = dir.path().join("subs");
    fs::create_dir(&subs).unwrap();
    fs::write(subs.join("b.srt"), "not subtitles at all\n").unwrap();
    fs::write(subs.join("a.srt"), SAMPLE).unwrap();
    fs::write(subs.join("c.srt"), SAMPLE).unwrap();

    let output = srt2txt(dir.path(), &["subs"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Directory mode activated for: subs"));
    assert!(out.contains("Processing task 3 of 3..."));
    assert!(out.contains("Summary: 2 succeeded, 1 failed."));
    let a = out.find("subs/a.txt").unwrap();
    let c = out.find("subs/c.txt").unwrap();
    assert!(a < c);

    assert!(stderr(&output).contains("b.srt"));
    assert_eq!(fs::read_to_string(subs.join("a.txt")).unwrap(), EXPECTED);
    assert_eq!(fs::read_to_string(subs.join("c.txt")).unwrap(), EXPECTED);
    assert!(!subs.join("b.txt").exists());

    let output = srt2txt(dir.path(), &["--strict", "subs"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn empty_directory_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();

    let output = srt2txt(dir.path(), &["empty"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("No .srt files found in 'empty'."));
}

#[test]
fn directory_with_explicit_output_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("subs")).unwrap();

    let output = srt2txt(dir.path(), &["subs", "out.txt"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Directory input is not supported"));
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn help_keyword_and_flags_print_usage() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.srt"), SAMPLE).unwrap();

    for arg in ["help", "-h", "--help"] {
        let output = srt2txt(dir.path(), &[arg]);
        assert!(output.status.success(), "{arg} should exit 0");
        assert!(stdout(&output).contains("Usage"), "{arg} should print usage");
    }
    assert!(!dir.path().join("input.txt").exists());
}

#[test]
fn report_flag_writes_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.srt"), SAMPLE).unwrap();

    let output = srt2txt(dir.path(), &["--report", "report.json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report["succeeded"], 1);
    assert_eq!(report["failed"], 0);
    assert_eq!(report["results"][0]["outcome"], "success");
    assert_eq!(report["results"][0]["output"], "input.txt");
}

#[test]
fn preview_flag_prints_content_ends() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.srt"), SAMPLE).unwrap();

    let output = srt2txt(dir.path(), &["--preview"]);
    let out = stdout(&output);
    assert!(out.contains("--- Content Preview ---"));
    assert!(out.contains(&format!("{EXPECTED}...")));
}

#[test]
fn report_write_failure_is_reported_without_failing_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.srt"), SAMPLE).unwrap();
    fs::write(dir.path().join("blocker"), "").unwrap();

    let output = srt2txt(dir.path(), &["--strict", "--report", "blocker/report.json"]);
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.starts_with("Error: "));
    assert!(!err.contains("Io {"));
    assert_eq!(
        fs::read_to_string(dir.path().join("input.txt")).unwrap(),
        EXPECTED
    );
}

#[test]
fn empty_argument_converts_the_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.srt"), SAMPLE).unwrap();

    let output = srt2txt(dir.path(), &[""]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Directory mode activated for: ."));
    assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), EXPECTED);
}
