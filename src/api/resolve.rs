//! Argument resolution: maps the positional arguments onto conversion tasks.
//!
//! | arguments             | tasks                                         |
//! |-----------------------|-----------------------------------------------|
//! | none                  | `input.srt -> input.txt`                      |
//! | one directory         | every `*.srt` directly inside, sorted by path |
//! | one `*.srt` file      | `file.srt -> file.txt`                        |
//! | one other path        | `input.srt -> path`                           |
//! | two or more           | `arg0 -> arg1`, the rest are ignored          |
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::{ConversionTask, DEFAULT_INPUT, ResolveMode, SUBTITLE_EXTENSION};

/// Tasks resolved from the command line, plus how they were interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub mode: ResolveMode,
    /// Empty when a directory holds no subtitle files
    pub tasks: Vec<ConversionTask>,
    /// Arguments past the second one, which are ignored
    pub ignored: Vec<PathBuf>,
}

impl Resolution {
    fn single(mode: ResolveMode, task: ConversionTask) -> Self {
        Self {
            mode,
            tasks: vec![task],
            ignored: Vec::new(),
        }
    }
}

/// Resolve positional arguments into an ordered list of conversion tasks.
///
/// The directory check runs before the extension check, so a directory named
/// `clips.srt` is still converted in directory mode. A directory given as the
/// first of two or more arguments is rejected with `Error::DirectoryWithOutput`.
pub fn resolve_tasks<P: AsRef<Path>>(args: &[P]) -> Result<Resolution> {
    let resolution = match args {
        [] => Resolution::single(
            ResolveMode::Default,
            ConversionTask::with_text_sibling(DEFAULT_INPUT),
        ),
        [arg] => resolve_single(arg_path(arg.as_ref()))?,
        [input, output, rest @ ..] => {
            let input = arg_path(input.as_ref());
            if input.is_dir() {
                return Err(Error::DirectoryWithOutput {
                    path: input.to_path_buf(),
                });
            }

            let ignored: Vec<PathBuf> = rest.iter().map(|p| p.as_ref().to_path_buf()).collect();
            if !ignored.is_empty() {
                warn!("Ignoring extra arguments: {:?}", ignored);
            }

            Resolution {
                mode: ResolveMode::Explicit,
                tasks: vec![ConversionTask::new(input, arg_path(output.as_ref()))],
                ignored,
            }
        }
    };

    info!(
        "Resolved {} task(s) in {:?} mode",
        resolution.tasks.len(),
        resolution.mode
    );
    Ok(resolution)
}

/// An empty argument names the current directory.
fn arg_path(arg: &Path) -> &Path {
    if arg.as_os_str().is_empty() {
        Path::new(".")
    } else {
        arg
    }
}

fn resolve_single(arg: &Path) -> Result<Resolution> {
    if arg.is_dir() {
        let tasks = subtitle_files(arg)?
            .into_iter()
            .map(ConversionTask::with_text_sibling)
            .collect();
        return Ok(Resolution {
            mode: ResolveMode::Directory(arg.to_path_buf()),
            tasks,
            ignored: Vec::new(),
        });
    }

    if has_subtitle_extension(arg) {
        Ok(Resolution::single(
            ResolveMode::Input,
            ConversionTask::with_text_sibling(arg),
        ))
    } else {
        Ok(Resolution::single(
            ResolveMode::Output,
            ConversionTask::new(DEFAULT_INPUT, arg),
        ))
    }
}

/// Whether `path` ends in `.srt`, ignoring case.
pub fn has_subtitle_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SUBTITLE_EXTENSION))
}

/// Files directly inside `dir` with the exact extension `.srt`, sorted by path.
pub fn subtitle_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && path.extension() == Some(OsStr::new(SUBTITLE_EXTENSION)) {
            files.push(path);
        } else {
            debug!("Skipping {:?}", path);
        }
    }
    files.sort();
    Ok(files)
}
