#![allow(clippy::doc_markdown)]

//! assumptions-log - Assumption, caveat, debt and todo logs from code comments
//!
//! Scans source trees for structured comment blocks such as
//!
//! ```text
//! # Assumption: Config defaults to UTC
//! # Quality: High
//! # Impact: Low
//! # Timestamps without zone info are read as UTC.
//! ```
//!
//! and merges the rendered entries into a Markdown template.
//!
//! # Architecture
//!
//! ```text
//! assumptions-log/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # LogError
//! ├── grammar.rs    # Comment dialects and line grammars
//! ├── items/        # LogItem trait, built-in and custom kinds
//! ├── registry.rs   # LogType kind-sets and LogItemRegistry
//! ├── session.rs    # RawMatch and ExtractionSession
//! ├── extractor.rs  # Directory walk and matching
//! ├── merger.rs     # Template substitution and change detection
//! ├── config.rs     # YAML configuration
//! └── log.rs        # Log facade
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use assumptions_log::Log;
//!
//! let mut log = Log::new("assumptions_caveats_log", "assumptions_caveats_log.md")?;
//! log.add_builtin_items()?;
//! log.find_items("src", ".py")?;
//! if !log.write_log(None, false)? {
//!     println!("Nudge: Have you updated your assumptions and caveats?");
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod error;
mod extractor;
pub mod grammar;
pub mod items;
mod log;
mod merger;
mod registry;
mod session;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use config::{CONFIG_FILE_NAME, CustomKindConfig, LogConfig};
pub use error::LogError;
pub use extractor::{Extractor, ScanStats};
pub use grammar::{CommentDialect, Grammar, MatchFields};
pub use items::{
    Assumption, Caveat, CustomKind, Debt, ItemStyle, LogItem, Todo, clean_detail,
};
pub use log::Log;
pub use merger::{
    DATE_FORMAT, DATE_MARKER, TemplateMerger, format_date, strip_dates, unchanged_except_dates,
};
pub use registry::{LogItemRegistry, LogType};
pub use session::{ExtractionSession, RawMatch};
