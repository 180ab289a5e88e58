#![doc = r#"
srt2txt — turn SubRip (`.srt`) subtitle files into plain text articles.

Every caption body is flattened onto one line and the captions are joined with
single spaces, in file order. Index and timing lines are dropped. The crate
powers the `srt2txt` CLI and can be embedded in your own Rust applications.

Convert text in memory
----------------------
```rust
let converted = srt2txt::convert_str(
    "1\n00:00:01,000 --> 00:00:02,000\nHello\nworld\n\n2\n00:00:03,000 --> 00:00:04,000\nBye\n",
)?;
assert_eq!(converted.text, "Hello world Bye");
assert_eq!(converted.captions, 2);
# Ok::<(), srt2txt::ParseError>(())
```

Convert a file
--------------
```rust,no_run
use std::path::Path;

fn main() -> srt2txt::Result<()> {
    srt2txt::convert_file(Path::new("lecture.srt"), Path::new("notes/lecture.txt"))?;
    Ok(())
}
```

Resolve arguments and run a batch
---------------------------------
```rust,no_run
use std::io;
use srt2txt::{resolve_tasks, run_tasks, DriverOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let resolution = resolve_tasks(&["subtitles/"])?;
    let report = run_tasks(
        &resolution.tasks,
        &DriverOptions::default(),
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    println!("succeeded={} failed={}", report.succeeded, report.failed);
    Ok(())
}
```

Error handling
--------------
File-level functions return `srt2txt::Result<T>`; `Error::outcome` maps each error
onto the `TaskOutcome` a batch reports for it.

Useful modules
--------------
- [`api`] — conversion entry points, argument resolution and the batch driver.
- [`core`] — the caption parser and flattening step.
- [`io`] — reading subtitle files and writing text files.
- [`types`] — `ConversionTask`, `TaskOutcome`, `ResolveMode` and default paths.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::srt::{Caption, ParseError, parse_captions};
pub use error::{Error, Result};
pub use types::{
    ConversionTask, DEFAULT_INPUT, ResolveMode, SUBTITLE_EXTENSION, TEXT_EXTENSION, TaskOutcome,
};

pub use api::{
    BatchReport, ConvertedText, DriverOptions, Resolution, TaskResult, convert_file,
    convert_str, convert_task, resolve_tasks, run_tasks,
};
