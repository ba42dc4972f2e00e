//! Size-limited whole-file reads.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::detect::decode_text;
use crate::error::IoError;

/// Default upper bound for a single source file (10 MiB).
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 10 * 1024 * 1024;

/// Read a source file with size, binary and encoding checks.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Errors
/// Returns an [`IoError`] describing why the file is not usable text.
pub fn read_source_text<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata =
        fs::metadata(path).map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = fs::File::open(path)?;
    let capacity = usize::try_from(metadata.len()).unwrap_or_default();
    let mut buffer = Vec::with_capacity(capacity);
    file.read_to_end(&mut buffer)?;

    decode_text(buffer)
}

/// Read a whole text file without a size limit.
///
/// Used for templates and previously written logs, which the caller chose
/// explicitly.
///
/// # Errors
/// Returns `IoError::NotFound` for a missing file, otherwise the decoding
/// errors of [`decode_text`].
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, IoError> {
    let path = path.as_ref();
    let buffer = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IoError::NotFound(path.to_string_lossy().to_string()),
        _ => IoError::System(e),
    })?;
    decode_text(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exact_limit_is_allowed() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("exact.py");
        fs::write(&p, "0123456789").unwrap();
        assert_eq!(read_source_text(&p, 10).unwrap(), "0123456789");
    }

    #[test]
    fn test_read_text_missing() {
        let dir = TempDir::new().unwrap();
        let result = read_text(dir.path().join("template.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
