//! Annotation kinds.
//!
//! Every kind implements [`LogItem`]: it provides grammars to search with, a
//! template marker to substitute, an empty-state message and a pure render
//! function for one match.
//!
//! ```text
//! items/
//! ├── mod.rs         # LogItem trait, detail cleaning
//! ├── assumption.rs  # Assumption (rated)
//! ├── caveat.rs      # Caveat
//! ├── debt.rs        # Technical debt
//! ├── todo.rs        # Todo checklist
//! └── custom.rs      # User-defined kinds
//! ```

mod assumption;
mod caveat;
mod custom;
mod debt;
mod todo;

use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::{Grammar, MatchFields, compile_regex, match_grammars};

pub use assumption::Assumption;
pub use caveat::Caveat;
pub use custom::{CustomKind, ItemStyle};
pub use debt::Debt;
pub use todo::Todo;

static REPEATED_SPACES: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"[ ]{2,}"));

/// Capability set every annotation kind provides.
pub trait LogItem {
    /// Kind name used in headings and log messages (e.g. "Assumption").
    fn name(&self) -> &str;

    /// Grammars tried over each file, in priority order.
    fn grammars(&self) -> &[Grammar];

    /// Literal template token replaced with this kind's entries.
    fn template_marker(&self) -> &str;

    /// Text inserted when no entries were found.
    fn empty_message(&self) -> &str;

    /// Render one match. `number` is 1-based and `file_path` is the path
    /// recorded at discovery time.
    fn render(&self, number: usize, file_path: &str, fields: &MatchFields) -> String;

    /// Every match of this kind in `text`, in text order.
    fn find_matches(&self, text: &str) -> Vec<MatchFields> {
        match_grammars(self.grammars(), text)
    }
}

/// Turn a raw detail block into one line of prose.
///
/// Strips `line_prefix` (indentation plus comment marker) from every line,
/// joins the lines with single spaces and collapses runs of spaces.
/// Lines that do not start with `line_prefix` are kept as they are, so
/// cleaning clean text again is a no-op unless the prose itself starts
/// with `line_prefix`.
#[must_use]
pub fn clean_detail(line_prefix: &str, block: &str) -> String {
    let joined = block
        .lines()
        .map(|line| {
            if line_prefix.is_empty() {
                line
            } else {
                line.strip_prefix(line_prefix).unwrap_or(line)
            }
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    REPEATED_SPACES.replace_all(&joined, " ").into_owned()
}

/// Heading block shared by caveat-like kinds.
pub(crate) fn render_heading_entry(
    kind: &str,
    number: usize,
    file_path: &str,
    fields: &MatchFields,
) -> String {
    let detail = clean_detail(&fields.line_prefix(), &fields.detail);
    let mut lines = vec![
        format!("### {kind} {number}: {}", fields.title),
        String::new(),
        format!("Location: `{file_path}`"),
        String::new(),
    ];
    if !detail.is_empty() {
        lines.push(detail);
        lines.push(String::new());
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Checklist line shared by todo-like kinds.
pub(crate) fn render_checklist_entry(fields: &MatchFields) -> String {
    let detail = clean_detail(&fields.line_prefix(), &fields.detail);
    let text = if detail.is_empty() {
        fields.title.clone()
    } else {
        format!("{} {detail}", fields.title)
    };
    format!("- [ ] {}", REPEATED_SPACES.replace_all(text.trim(), " "))
}
