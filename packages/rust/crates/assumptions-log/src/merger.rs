//! Template substitution and change detection.
//!
//! The composed log is compared with the file already on disk after removing
//! every `DD/MM/YYYY` date from both, so a run whose only difference is the
//! date line does not rewrite the log.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use assumptions_io::{IoError, read_text, write_text};

use crate::error::LogError;
use crate::grammar::compile_regex;
use crate::registry::LogItemRegistry;
use crate::session::ExtractionSession;

/// Template token replaced with the current date.
pub const DATE_MARKER: &str = "{ current_date }";

/// `chrono` format used for [`DATE_MARKER`]. Must agree with [`DATE_PATTERN`].
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const DATE_PATTERN: &str = r"[0-9]{2}/[0-9]{2}/[0-9]{4}";

static DATES: LazyLock<Regex> = LazyLock::new(|| compile_regex(DATE_PATTERN));

/// Format `date` the way [`DATE_MARKER`] is substituted.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Remove every `DD/MM/YYYY` date from `text`.
#[must_use]
pub fn strip_dates(text: &str) -> Cow<'_, str> {
    DATES.replace_all(text, "")
}

/// Whether two logs are equal once dates are removed.
#[must_use]
pub fn unchanged_except_dates(old: &str, new: &str) -> bool {
    strip_dates(old) == strip_dates(new)
}

/// Merges rendered fragments into a template and writes the result.
#[derive(Debug)]
pub struct TemplateMerger<'a> {
    registry: &'a LogItemRegistry,
    builtin_template: &'a str,
}

impl<'a> TemplateMerger<'a> {
    /// Merger for the kinds in `registry`, falling back to `builtin_template`
    /// when no template file is given.
    #[must_use]
    pub fn new(registry: &'a LogItemRegistry, builtin_template: &'a str) -> Self {
        Self {
            registry,
            builtin_template,
        }
    }

    /// Load the template override, or the built-in template.
    ///
    /// # Errors
    /// Returns `LogError::Template` when the override cannot be read.
    pub fn load_template(&self, template: Option<&Path>) -> Result<Cow<'a, str>, LogError> {
        match template {
            Some(path) => read_text(path)
                .map(Cow::Owned)
                .map_err(|source| LogError::Template {
                    path: path.to_path_buf(),
                    source,
                }),
            None => Ok(Cow::Borrowed(self.builtin_template)),
        }
    }

    /// Substitute the date and every kind's entries into `template`.
    ///
    /// Kinds are processed in registration order and each marker is
    /// replaced wherever it occurs. A kind without entries contributes its
    /// empty-state message.
    pub fn compose(&self, template: &str, session: &mut ExtractionSession, date: NaiveDate) -> String {
        let mut content = template.to_string();
        if content.contains(DATE_MARKER) {
            content = content.replace(DATE_MARKER, &format_date(date));
        }

        session.finalize(self.registry);
        for (kind, item) in self.registry.iter().enumerate() {
            let marker = item.template_marker();
            if !content.contains(marker) {
                tracing::warn!(kind = item.name(), marker, "template has no marker for log item");
            }

            let rendered = session.rendered(kind);
            let replacement = if rendered.is_empty() {
                tracing::warn!("No {} items found.", item.name());
                item.empty_message().trim().to_string()
            } else {
                rendered.join("\n").trim().to_string()
            };
            content = content.replace(marker, &replacement);
        }
        content
    }

    /// Compose the log for today and write it to `output` if it changed.
    ///
    /// Returns `true` when the file was (or, for a dry run, would be)
    /// written.
    ///
    /// # Errors
    /// Returns `LogError::Template` for an unreadable template and
    /// `LogError::Write` when the existing log cannot be read or the new
    /// one cannot be written.
    pub fn render(
        &self,
        template: Option<&Path>,
        output: &Path,
        session: &mut ExtractionSession,
        dry_run: bool,
    ) -> Result<bool, LogError> {
        self.render_on(template, output, session, dry_run, chrono::Local::now().date_naive())
    }

    /// [`render`](Self::render) with an explicit date.
    ///
    /// # Errors
    /// See [`render`](Self::render).
    pub fn render_on(
        &self,
        template: Option<&Path>,
        output: &Path,
        session: &mut ExtractionSession,
        dry_run: bool,
        date: NaiveDate,
    ) -> Result<bool, LogError> {
        let template_content = self.load_template(template)?;
        let content = self.compose(&template_content, session, date);

        if output.exists() {
            tracing::info!(path = %output.display(), "log exists, checking for changes");
            let previous = read_text(output).map_err(|source| write_error(output, source))?;
            if unchanged_except_dates(&previous, &content) {
                tracing::info!("No change to log items, log not updated.");
                return Ok(false);
            }
        }

        if dry_run {
            tracing::info!(path = %output.display(), "dry run, log would be written");
            return Ok(true);
        }

        tracing::info!(path = %output.display(), "writing log");
        write_text(output, &content).map_err(|source| write_error(output, source))?;
        Ok(true)
    }
}

fn write_error(path: &Path, source: IoError) -> LogError {
    LogError::Write {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format_matches_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let formatted = format_date(date);
        assert_eq!(formatted, "07/03/2024");
        assert_eq!(strip_dates(&formatted), "");
    }

    #[test]
    fn test_unchanged_except_dates() {
        assert!(unchanged_except_dates(
            "Last updated: 01/01/2024\nA",
            "Last updated: 31/12/2025\nA"
        ));
        assert!(!unchanged_except_dates(
            "Last updated: 01/01/2024\nA",
            "Last updated: 01/01/2024\nB"
        ));
    }
}
