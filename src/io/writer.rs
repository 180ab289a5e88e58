use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Write `text` as the entire content of `output`, creating missing parent directories first.
pub fn write_text(output: &Path, text: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(output, text).map_err(|e| Error::io(output, e))?;
    debug!("Wrote {} bytes to {:?}", text.len(), output);
    Ok(())
}
