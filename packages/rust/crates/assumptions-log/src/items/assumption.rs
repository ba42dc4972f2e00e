//! Assumptions carry Quality and Impact ratings and a mandatory detail block.

use crate::error::LogError;
use crate::grammar::{Grammar, MatchFields};
use crate::items::{LogItem, clean_detail};

const KEYWORDS: &[&str] = &["assumption", "assume"];

/// Assumption made by the code, rated for quality and impact.
#[derive(Debug, Clone)]
pub struct Assumption {
    grammars: Vec<Grammar>,
}

impl Assumption {
    /// Marker token in templates.
    pub const MARKER: &'static str = "{ assumptions }";

    /// Build the assumption kind for every comment dialect.
    ///
    /// # Errors
    /// Returns `LogError::Pattern` if a grammar fails to compile.
    pub fn new() -> Result<Self, LogError> {
        Ok(Self {
            grammars: Grammar::for_all_dialects(KEYWORDS, true, true)?,
        })
    }
}

impl LogItem for Assumption {
    fn name(&self) -> &str {
        "Assumption"
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    fn template_marker(&self) -> &str {
        Self::MARKER
    }

    fn empty_message(&self) -> &str {
        "Currently no assumptions in this analysis.\n"
    }

    fn render(&self, number: usize, file_path: &str, fields: &MatchFields) -> String {
        let detail = clean_detail(&fields.line_prefix(), &fields.detail);
        [
            format!("### Assumption {number}: {}", fields.title),
            String::new(),
            format!("* Location: `{file_path}`"),
            format!("* **Quality**: {}", fields.quality.as_deref().unwrap_or_default()),
            format!("* **Impact**: {}", fields.impact.as_deref().unwrap_or_default()),
            String::new(),
            detail,
            String::new(),
            String::new(),
        ]
        .join("\n")
    }
}
