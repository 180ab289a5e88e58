use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use std::path::{Path, PathBuf};

const USAGE_SCENARIOS: &str = "\
Usage scenarios:
  srt2txt                        Convert 'input.srt' to 'input.txt'
  srt2txt <folder>               Convert every .srt file inside the folder
  srt2txt <file.srt>             Convert 'file.srt' to 'file.txt'
  srt2txt <out.txt>              Convert 'input.srt' to 'out.txt'
  srt2txt <file.srt> <out.txt>   Convert as specified
  srt2txt help                   Show this help";

#[derive(Parser, Debug)]
#[command(
    name = "srt2txt",
    version,
    about = "Convert SRT subtitle files or directories to plain text",
    after_help = USAGE_SCENARIOS
)]
pub struct CliArgs {
    /// A subtitle file, an output file, a directory, or an input/output pair
    // An empty value stands for the current directory, so it must get past clap.
    #[arg(value_name = "FILES", value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub files: Vec<PathBuf>,

    /// Print the first and last characters of each converted text
    #[arg(long, default_value_t = false)]
    pub preview: bool,

    /// Exit with a failure status when any task fails
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Write a JSON report of every task outcome to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// `help` given as the first positional argument
    pub fn wants_help(&self) -> bool {
        self.files
            .first()
            .is_some_and(|first| first.as_path() == Path::new("help"))
    }
}
