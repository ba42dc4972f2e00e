//! Caveats: a title plus an optional detail block.

use crate::error::LogError;
use crate::grammar::{Grammar, MatchFields};
use crate::items::{LogItem, render_heading_entry};

const KEYWORDS: &[&str] = &["caveat"];

/// Known limitation of the code.
#[derive(Debug, Clone)]
pub struct Caveat {
    grammars: Vec<Grammar>,
}

impl Caveat {
    /// Marker token in templates.
    pub const MARKER: &'static str = "{ caveats }";

    /// Build the caveat kind for every comment dialect.
    ///
    /// # Errors
    /// Returns `LogError::Pattern` if a grammar fails to compile.
    pub fn new() -> Result<Self, LogError> {
        Ok(Self {
            grammars: Grammar::for_all_dialects(KEYWORDS, false, false)?,
        })
    }
}

impl LogItem for Caveat {
    fn name(&self) -> &str {
        "Caveat"
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    fn template_marker(&self) -> &str {
        Self::MARKER
    }

    fn empty_message(&self) -> &str {
        "Currently no caveats in this analysis.\n"
    }

    fn render(&self, number: usize, file_path: &str, fields: &MatchFields) -> String {
        render_heading_entry("Caveat", number, file_path, fields)
    }
}
