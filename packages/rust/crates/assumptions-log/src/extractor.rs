//! Directory walk feeding file text through every registered kind.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use assumptions_io::{DEFAULT_MAX_SOURCE_BYTES, read_source_text};

use crate::error::LogError;
use crate::registry::LogItemRegistry;
use crate::session::{ExtractionSession, RawMatch};

/// Counters for one [`Extractor::find`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files read and matched
    pub files_scanned: usize,
    /// Files skipped because they could not be read as text
    pub files_skipped: usize,
    /// Matches recorded across all kinds
    pub matches: usize,
}

/// Walks a search root and records every match of every registered kind.
#[derive(Debug)]
pub struct Extractor<'a> {
    registry: &'a LogItemRegistry,
    max_file_bytes: u64,
}

impl<'a> Extractor<'a> {
    /// Extractor over the kinds in `registry`.
    #[must_use]
    pub fn new(registry: &'a LogItemRegistry) -> Self {
        Self {
            registry,
            max_file_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }

    /// Skip files larger than `max_file_bytes`.
    #[must_use]
    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }

    /// Search `search_path` (relative to the working directory) for files
    /// ending in `extension` and record their matches in `session`.
    ///
    /// Recorded paths are relative to the parent of the resolved search
    /// root, so they start with the root directory's own name. Unreadable
    /// files are logged and skipped.
    ///
    /// # Errors
    /// Returns `LogError::NoLogItems` when nothing is registered and
    /// `LogError::SearchRoot` when the search path cannot be resolved.
    pub fn find(
        &self,
        search_path: &Path,
        extension: &str,
        session: &mut ExtractionSession,
    ) -> Result<ScanStats, LogError> {
        if self.registry.is_empty() {
            return Err(LogError::NoLogItems);
        }

        let root = resolve_root(search_path)?;
        let base = root.parent().unwrap_or(&root).to_path_buf();
        let suffix = normalize_extension(extension);
        tracing::info!(root = %root.display(), extension = %suffix, "searching for log items");

        session.sync_with(self.registry);
        let mut stats = ScanStats::default();

        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!(error = %err, "directory entry could not be read, skipping");
                    stats.files_skipped += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if !suffix.is_empty() && !entry.file_name().to_string_lossy().ends_with(suffix.as_str()) {
                continue;
            }
            let path = entry.path();

            let content = match read_source_text(path, self.max_file_bytes) {
                Ok(content) => content,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "file could not be read, skipping");
                    stats.files_skipped += 1;
                    continue;
                }
            };
            stats.files_scanned += 1;

            let file_path = posix_relative(path, &base);
            for (kind, item) in self.registry.iter().enumerate() {
                let found = item.find_matches(&content);
                if !found.is_empty() {
                    tracing::debug!(path = %file_path, kind = item.name(), count = found.len(), "matches");
                }
                stats.matches += found.len();
                for fields in found {
                    session.push(
                        kind,
                        RawMatch {
                            file_path: file_path.clone(),
                            fields,
                        },
                    );
                }
            }
        }

        tracing::info!(
            scanned = stats.files_scanned,
            skipped = stats.files_skipped,
            matches = stats.matches,
            "search finished"
        );
        Ok(stats)
    }
}

fn resolve_root(search_path: &Path) -> Result<PathBuf, LogError> {
    let to_error = |source| LogError::SearchRoot {
        path: search_path.to_path_buf(),
        source,
    };
    let cwd = std::env::current_dir().map_err(to_error)?;
    cwd.join(search_path).canonicalize().map_err(to_error)
}

/// `py` and `.py` both select files ending in `.py`.
fn normalize_extension(extension: &str) -> String {
    let extension = extension.trim();
    if extension.is_empty() || extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

fn posix_relative(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
