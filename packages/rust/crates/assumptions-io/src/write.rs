//! Whole-file output writes.

use std::fs;
use std::path::Path;

use crate::error::IoError;

/// Write `content` to `path`, replacing any existing file.
///
/// The parent directory must already exist; it is never created here.
///
/// # Errors
/// Returns `IoError::NotFound` when the parent directory is missing and
/// `IoError::System` for any other write failure.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        if !parent.is_dir() {
            return Err(IoError::NotFound(parent.to_string_lossy().to_string()));
        }
    }

    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote text file");
    Ok(())
}
