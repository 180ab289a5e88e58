use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read the whole subtitle file as UTF-8 text.
///
/// A missing file is reported as `Error::NotFound`; every other failure,
/// including content that is not valid UTF-8, is an `Error::Io`.
pub fn read_subtitles(input: &Path) -> Result<String> {
    debug!("Reading file: {:?}", input);
    fs::read_to_string(input).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: input.to_path_buf(),
        },
        _ => Error::io(input, e),
    })
}
