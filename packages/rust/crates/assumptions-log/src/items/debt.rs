//! Technical debt notes.

use crate::error::LogError;
use crate::grammar::{Grammar, MatchFields};
use crate::items::{LogItem, render_heading_entry};

const KEYWORDS: &[&str] = &["technical debt", "tech debt", "debt"];

/// Shortcut taken in the code that should be paid back later.
#[derive(Debug, Clone)]
pub struct Debt {
    grammars: Vec<Grammar>,
}

impl Debt {
    /// Marker token in templates.
    pub const MARKER: &'static str = "{ debt }";

    /// Build the debt kind for every comment dialect.
    ///
    /// # Errors
    /// Returns `LogError::Pattern` if a grammar fails to compile.
    pub fn new() -> Result<Self, LogError> {
        Ok(Self {
            grammars: Grammar::for_all_dialects(KEYWORDS, false, false)?,
        })
    }
}

impl LogItem for Debt {
    fn name(&self) -> &str {
        "Debt"
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    fn template_marker(&self) -> &str {
        Self::MARKER
    }

    fn empty_message(&self) -> &str {
        "Currently no technical debt recorded.\n"
    }

    fn render(&self, number: usize, file_path: &str, fields: &MatchFields) -> String {
        render_heading_entry("Debt", number, file_path, fields)
    }
}
