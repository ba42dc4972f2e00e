//! Error types for log extraction and rendering.
//!
//! Library crates use `thiserror` for explicit error enums. Per-file read
//! failures never appear here: the extractor logs and skips them.

use std::path::PathBuf;

use thiserror::Error;

use assumptions_io::IoError;

/// Errors surfaced to the caller of the log pipeline.
#[derive(Error, Debug)]
pub enum LogError {
    /// Requested kind-set is not registered.
    #[error("{name} is not a valid log type. Choose from {valid}.")]
    UnknownLogType {
        /// Name that was requested
        name: String,
        /// Comma separated list of valid names
        valid: String,
    },

    /// Directory that should hold the output log does not exist.
    #[error("Output directory does not exist: {0}")]
    MissingOutputDir(PathBuf),

    /// Extraction was requested before any log item was registered.
    #[error("No log items have been added to the log")]
    NoLogItems,

    /// A log item does not provide the required capabilities.
    #[error("Invalid log item '{name}': {reason}")]
    InvalidLogItem {
        /// Name of the rejected item (may be empty)
        name: String,
        /// What is missing
        reason: String,
    },

    /// Two registered log items share a template marker.
    #[error("Template marker {0} is already registered")]
    DuplicateMarker(String),

    /// Search root cannot be resolved.
    #[error("Cannot resolve search path {path}: {source}")]
    SearchRoot {
        /// Path as given by the caller
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Keyword grammar failed to compile.
    #[error("Invalid comment grammar: {0}")]
    Pattern(#[from] regex::Error),

    /// Template is missing or unreadable.
    #[error("Cannot read template {path}: {source}")]
    Template {
        /// Template path
        path: PathBuf,
        /// Underlying error
        source: IoError,
    },

    /// Output log cannot be read back or written.
    #[error("Cannot write log {path}: {source}")]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying error
        source: IoError,
    },

    /// Configuration file is missing or invalid.
    #[error("Invalid configuration {path}: {reason}")]
    Config {
        /// Config file path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },
}
