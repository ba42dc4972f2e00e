//! User-defined annotation kinds.

use crate::error::LogError;
use crate::grammar::{Grammar, MatchFields};
use crate::items::{LogItem, render_checklist_entry, render_heading_entry};

/// How a custom kind renders its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStyle {
    /// `### <Name> <n>: <title>` block with location and detail
    #[default]
    Heading,
    /// `- [ ] <title> <detail>` line
    Checklist,
}

/// Annotation kind defined at runtime, for example from the config file.
///
/// ```rust,ignore
/// let risk = CustomKind::new("Risk", &["risk"], "{ risks }", ItemStyle::Heading)?
///     .with_empty_message("No known risks.");
/// ```
#[derive(Debug, Clone)]
pub struct CustomKind {
    name: String,
    marker: String,
    empty_message: String,
    style: ItemStyle,
    grammars: Vec<Grammar>,
}

impl CustomKind {
    /// Create a kind matching `keywords` in every comment dialect.
    ///
    /// # Errors
    /// Returns `LogError::InvalidLogItem` when the keyword list is empty and
    /// `LogError::Pattern` when a grammar fails to compile.
    pub fn new(
        name: impl Into<String>,
        keywords: &[&str],
        marker: impl Into<String>,
        style: ItemStyle,
    ) -> Result<Self, LogError> {
        let name = name.into();
        let grammars = Grammar::for_all_dialects(keywords, false, false).map_err(|e| match e {
            LogError::InvalidLogItem { reason, .. } => LogError::InvalidLogItem {
                name: name.clone(),
                reason,
            },
            other => other,
        })?;
        Ok(Self {
            empty_message: format!("Currently no {} items.\n", name.to_lowercase()),
            name,
            marker: marker.into(),
            style,
            grammars,
        })
    }

    /// Replace the default empty-state message.
    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}

impl LogItem for CustomKind {
    fn name(&self) -> &str {
        &self.name
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    fn template_marker(&self) -> &str {
        &self.marker
    }

    fn empty_message(&self) -> &str {
        &self.empty_message
    }

    fn render(&self, number: usize, file_path: &str, fields: &MatchFields) -> String {
        match self.style {
            ItemStyle::Heading => render_heading_entry(&self.name, number, file_path, fields),
            ItemStyle::Checklist => render_checklist_entry(fields),
        }
    }
}
