//! Todos render as checklist lines rather than heading blocks.

use crate::error::LogError;
use crate::grammar::{Grammar, MatchFields};
use crate::items::{LogItem, render_checklist_entry};

const KEYWORDS: &[&str] = &["todo", "to do", "to-do"];

/// Outstanding work noted in a comment.
#[derive(Debug, Clone)]
pub struct Todo {
    grammars: Vec<Grammar>,
}

impl Todo {
    /// Marker token in templates.
    pub const MARKER: &'static str = "{ todos }";

    /// Build the todo kind for every comment dialect.
    ///
    /// # Errors
    /// Returns `LogError::Pattern` if a grammar fails to compile.
    pub fn new() -> Result<Self, LogError> {
        Ok(Self {
            grammars: Grammar::for_all_dialects(KEYWORDS, false, false)?,
        })
    }
}

impl LogItem for Todo {
    fn name(&self) -> &str {
        "Todo"
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    fn template_marker(&self) -> &str {
        Self::MARKER
    }

    fn empty_message(&self) -> &str {
        "Great, there's nothing to do!\n"
    }

    fn render(&self, _number: usize, _file_path: &str, fields: &MatchFields) -> String {
        render_checklist_entry(fields)
    }
}
