//! `Log` ties a kind-set, its registry, one extraction session and an
//! output path together.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::LogError;
use crate::extractor::{Extractor, ScanStats};
use crate::items::LogItem;
use crate::merger::TemplateMerger;
use crate::registry::{LogItemRegistry, LogType};
use crate::session::ExtractionSession;

/// Searches files for log items and writes them to an output log.
#[derive(Debug)]
pub struct Log {
    log_type: LogType,
    log_file_path: PathBuf,
    registry: LogItemRegistry,
    session: ExtractionSession,
    max_file_bytes: Option<u64>,
}

impl Log {
    /// Create a log of kind-set `log_type` written to `log_file_path`.
    ///
    /// No kinds are registered yet; see [`add_builtin_items`](Self::add_builtin_items).
    ///
    /// # Errors
    /// Returns `LogError::UnknownLogType` for an unknown kind-set and
    /// `LogError::MissingOutputDir` when the output directory is missing.
    pub fn new(log_type: &str, log_file_path: impl Into<PathBuf>) -> Result<Self, LogError> {
        let log_type: LogType = log_type.parse()?;
        let log_file_path = log_file_path.into();

        let parent = log_file_path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            if !parent.is_dir() {
                return Err(LogError::MissingOutputDir(parent.to_path_buf()));
            }
        }

        Ok(Self {
            log_type,
            log_file_path,
            registry: LogItemRegistry::new(),
            session: ExtractionSession::default(),
            max_file_bytes: None,
        })
    }

    /// Kind-set of this log.
    #[must_use]
    pub fn log_type(&self) -> LogType {
        self.log_type
    }

    /// Output path.
    #[must_use]
    pub fn log_file_path(&self) -> &Path {
        &self.log_file_path
    }

    /// Registered kinds.
    #[must_use]
    pub fn registry(&self) -> &LogItemRegistry {
        &self.registry
    }

    /// Matches and fragments collected so far.
    #[must_use]
    pub fn session(&self) -> &ExtractionSession {
        &self.session
    }

    /// Skip source files larger than `max_file_bytes`.
    pub fn set_max_file_bytes(&mut self, max_file_bytes: u64) {
        self.max_file_bytes = Some(max_file_bytes);
    }

    /// Register one kind.
    ///
    /// # Errors
    /// See [`LogItemRegistry::register`].
    pub fn add_log_item(&mut self, item: Box<dyn LogItem>) -> Result<(), LogError> {
        self.registry.register(item)?;
        self.session.sync_with(&self.registry);
        Ok(())
    }

    /// Register every built-in kind of this log's kind-set.
    ///
    /// # Errors
    /// See [`LogItemRegistry::register`].
    pub fn add_builtin_items(&mut self) -> Result<(), LogError> {
        for item in self.log_type.item_types()? {
            self.add_log_item(item)?;
        }
        Ok(())
    }

    /// Search `search_path` for files ending in `extension`.
    ///
    /// May be called more than once; matches accumulate.
    ///
    /// # Errors
    /// See [`Extractor::find`].
    pub fn find_items(
        &mut self,
        search_path: impl AsRef<Path>,
        extension: &str,
    ) -> Result<ScanStats, LogError> {
        let mut extractor = Extractor::new(&self.registry);
        if let Some(max) = self.max_file_bytes {
            extractor = extractor.with_max_file_bytes(max);
        }
        extractor.find(search_path.as_ref(), extension, &mut self.session)
    }

    /// Write the log using `template` or the kind-set's built-in template.
    ///
    /// Returns whether the log was (or, for a dry run, would be) written.
    ///
    /// # Errors
    /// See [`TemplateMerger::render`].
    pub fn write_log(&mut self, template: Option<&Path>, dry_run: bool) -> Result<bool, LogError> {
        TemplateMerger::new(&self.registry, self.log_type.builtin_template()).render(
            template,
            &self.log_file_path,
            &mut self.session,
            dry_run,
        )
    }

    /// [`write_log`](Self::write_log) with an explicit date.
    ///
    /// # Errors
    /// See [`TemplateMerger::render`].
    pub fn write_log_on(
        &mut self,
        template: Option<&Path>,
        dry_run: bool,
        date: NaiveDate,
    ) -> Result<bool, LogError> {
        TemplateMerger::new(&self.registry, self.log_type.builtin_template()).render_on(
            template,
            &self.log_file_path,
            &mut self.session,
            dry_run,
            date,
        )
    }
}
