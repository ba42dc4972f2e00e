//! Binary detection and decoding utilities.

use memchr::memchr;

use crate::error::IoError;

/// Number of leading bytes inspected for NULL bytes.
const BINARY_PROBE_LEN: usize = 8192;

/// Quick binary detection - checks first 8KB for NULL bytes.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let check_len = std::cmp::min(buffer.len(), BINARY_PROBE_LEN);
    memchr(0, &buffer[..check_len]).is_some()
}

/// Decode bytes to a `String`, rejecting binary and non UTF-8 content.
///
/// Source files that are not valid UTF-8 cannot be matched reliably against
/// the comment grammars, so there is no lossy fallback here.
///
/// # Errors
/// Returns `IoError::BinaryFile` when binary content is detected and
/// `IoError::Encoding` when the bytes are not valid UTF-8.
pub fn decode_text(buffer: Vec<u8>) -> Result<String, IoError> {
    if is_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }

    String::from_utf8(buffer).map_err(|e| IoError::Encoding(e.utf8_error().valid_up_to()))
}
