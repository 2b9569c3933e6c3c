use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::{CalendarError, Result};

/// Write `content` to `path` only when it differs from what is already on
/// disk. A missing file counts as empty existing content. Returns `true`
/// when the file was actually (re)written.
///
/// Bytes are written exactly as given; no line-ending translation.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    let io_err = |source: std::io::Error| CalendarError::Io {
        path: path.to_path_buf(),
        source,
    };

    let existing = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(io_err(e)),
    };

    if existing == content {
        info!(path = %path.display(), "output unchanged, skipping write");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    fs::write(path, content.as_bytes()).map_err(io_err)?;
    info!(path = %path.display(), bytes = content.len(), "wrote output file");
    Ok(true)
}
