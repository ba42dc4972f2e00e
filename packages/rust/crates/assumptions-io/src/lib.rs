#![allow(clippy::doc_markdown)]

//! assumptions-io - Safe whole-file text I/O for the assumptions log scanner
//!
//! Source trees contain all sorts of files. The scanner only wants text, and
//! only text small enough to hold in memory, so every read goes through the
//! checks in this crate before any comment grammar sees it.
//!
//! # Architecture
//!
//! ```text
//! assumptions-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & strict decoding
//! ├── read.rs     # Size-limited source reads
//! └── write.rs    # Whole-file output writes
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use assumptions_io::{read_source_text, IoError};
//!
//! match read_source_text("src/model.py", 10 * 1024 * 1024) {
//!     Ok(text) => scan(&text),
//!     Err(IoError::BinaryFile) => {} // not source code
//!     Err(e) => return Err(e),
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod detect;
mod error;
mod read;
mod write;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use detect::{decode_text, is_binary};
pub use error::IoError;
pub use read::{DEFAULT_MAX_SOURCE_BYTES, read_source_text, read_text};
pub use write::write_text;
