//! Line grammars for annotation comment blocks.
//!
//! A grammar recognizes one annotation kind in one comment dialect:
//!
//! ```text
//! <W><prefix> Assumption: <title>      header, W is any run of spaces/tabs
//! <W><prefix> Quality: <value>         rated kinds only ("Q:" accepted)
//! <W><prefix> Impact: <value>          rated kinds only ("I:" accepted)
//! <W><prefix> detail ...               detail block, zero or more lines
//! ```
//!
//! Every continuation line must start with exactly `W` followed by the
//! dialect prefix. The first line that does not ends the block, so an
//! annotation never swallows lines from a shallower or deeper scope.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LogError;

/// Compile a hardcoded pattern; an invalid one falls back to a regex that
/// matches no non-empty text.
pub(crate) fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

static QUALITY_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?i)^[ ]?q(?:uality)?[ \t]*:[ \t]?(.*\S)[ \t]*$"));
static IMPACT_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?i)^[ ]?i(?:mpact)?[ \t]*:[ \t]?(.*\S)[ \t]*$"));

/// Comment syntax an annotation is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentDialect {
    /// `# ...` (Python, R, shell, YAML)
    Hash,
    /// `#' ...` (roxygen doc comments)
    Roxygen,
    /// `// ...` (C-family line comments)
    DoubleSlash,
}

impl CommentDialect {
    /// All dialects, in the order built-in kinds register them.
    pub const ALL: [Self; 3] = [Self::Hash, Self::Roxygen, Self::DoubleSlash];

    /// Literal comment prefix.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Hash => "#",
            Self::Roxygen => "#'",
            Self::DoubleSlash => "//",
        }
    }
}

/// Fields captured for one annotation block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFields {
    /// Leading whitespace of the header line
    pub indent: String,
    /// Dialect the block was written in
    pub dialect: CommentDialect,
    /// Header title
    pub title: String,
    /// Quality rating (rated kinds only)
    pub quality: Option<String>,
    /// Impact rating (rated kinds only)
    pub impact: Option<String>,
    /// Raw detail lines, prefixes included, each terminated by `\n`
    pub detail: String,
}

impl MatchFields {
    /// Indentation plus comment prefix that starts every line of the block.
    #[must_use]
    pub fn line_prefix(&self) -> String {
        format!("{}{}", self.indent, self.dialect.prefix())
    }
}

/// One match with its line span, used to merge matches across dialects.
#[derive(Debug, Clone)]
struct SpannedMatch {
    start: usize,
    end: usize,
    grammar: usize,
    fields: MatchFields,
}

/// Grammar for one annotation kind in one comment dialect.
#[derive(Debug, Clone)]
pub struct Grammar {
    dialect: CommentDialect,
    header: Regex,
    rated: bool,
    detail_required: bool,
}

impl Grammar {
    /// Build a grammar accepting any of `keywords` (case-insensitive).
    ///
    /// `rated` requires Quality and Impact lines after the header;
    /// `detail_required` rejects blocks without at least one detail line.
    ///
    /// # Errors
    /// Returns `LogError::InvalidLogItem` for an empty keyword list and
    /// `LogError::Pattern` if the header pattern does not compile.
    pub fn new(
        dialect: CommentDialect,
        keywords: &[&str],
        rated: bool,
        detail_required: bool,
    ) -> Result<Self, LogError> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(|k| {
                k.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"[ \t]+")
            })
            .collect();
        if alternatives.is_empty() {
            return Err(LogError::InvalidLogItem {
                name: String::new(),
                reason: "grammar needs at least one keyword".to_string(),
            });
        }

        let pattern = format!(
            r"(?i)^([ \t]*){}[ ]?(?:{})[ \t]*:[ \t]?(.*\S)[ \t]*$",
            regex::escape(dialect.prefix()),
            alternatives.join("|")
        );

        Ok(Self {
            dialect,
            header: Regex::new(&pattern)?,
            rated,
            detail_required,
        })
    }

    /// Build one grammar per dialect in [`CommentDialect::ALL`].
    ///
    /// # Errors
    /// See [`Grammar::new`].
    pub fn for_all_dialects(
        keywords: &[&str],
        rated: bool,
        detail_required: bool,
    ) -> Result<Vec<Self>, LogError> {
        CommentDialect::ALL
            .iter()
            .map(|d| Self::new(*d, keywords, rated, detail_required))
            .collect()
    }

    /// Dialect this grammar recognizes.
    #[must_use]
    pub fn dialect(&self) -> CommentDialect {
        self.dialect
    }

    /// Find every block in `text`, in order, without overlap.
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<MatchFields> {
        self.scan(text, 0).into_iter().map(|m| m.fields).collect()
    }

    fn scan(&self, text: &str, grammar: usize) -> Vec<SpannedMatch> {
        let lines: Vec<&str> = text.lines().collect();
        let mut matches = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let Some(caps) = self.header.captures(lines[i]) else {
                i += 1;
                continue;
            };
            let indent = caps.get(1).map_or("", |m| m.as_str());
            let title = caps.get(2).map_or("", |m| m.as_str().trim());
            let lead = format!("{indent}{}", self.dialect.prefix());

            let mut j = i + 1;
            let (quality, impact) = if self.rated {
                let quality = rating(lines.get(j).copied(), &lead, &QUALITY_LINE);
                let impact = rating(lines.get(j + 1).copied(), &lead, &IMPACT_LINE);
                match (quality, impact) {
                    (Some(q), Some(imp)) => {
                        j += 2;
                        (Some(q), Some(imp))
                    }
                    _ => {
                        i += 1;
                        continue;
                    }
                }
            } else {
                (None, None)
            };

            let detail_start = j;
            while j < lines.len() && lines[j].starts_with(&lead) {
                j += 1;
            }
            if self.detail_required && j == detail_start {
                i += 1;
                continue;
            }

            let detail: String = lines[detail_start..j]
                .iter()
                .flat_map(|line| [*line, "\n"])
                .collect();

            matches.push(SpannedMatch {
                start: i,
                end: j,
                grammar,
                fields: MatchFields {
                    indent: indent.to_string(),
                    dialect: self.dialect,
                    title: title.to_string(),
                    quality,
                    impact,
                    detail,
                },
            });
            i = j;
        }

        matches
    }
}

fn rating(line: Option<&str>, lead: &str, pattern: &Regex) -> Option<String> {
    let rest = line?.strip_prefix(lead)?;
    pattern
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Run every grammar over `text` and merge the results in text order.
///
/// Matches are ordered by header line. When spans from different grammars
/// overlap, the one starting first wins; on the same header line the
/// earlier grammar wins. Overlapped matches are dropped.
#[must_use]
pub fn match_grammars(grammars: &[Grammar], text: &str) -> Vec<MatchFields> {
    let mut spanned: Vec<SpannedMatch> = grammars
        .iter()
        .enumerate()
        .flat_map(|(idx, g)| g.scan(text, idx))
        .collect();
    spanned.sort_by_key(|m| (m.start, m.grammar));

    let mut merged = Vec::with_capacity(spanned.len());
    let mut covered_until = 0;
    for m in spanned {
        if m.start < covered_until {
            continue;
        }
        covered_until = m.end;
        merged.push(m.fields);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_regex_invalid_falls_back() {
        let regex = compile_regex("(unclosed");
        assert!(!regex.is_match("(unclosed"));
        assert!(compile_regex("[0-9]+").is_match("42"));
    }

    fn assumption_grammar() -> Grammar {
        Grammar::new(CommentDialect::Hash, &["assumption", "assume"], true, true).unwrap()
    }

    fn caveat_grammar(dialect: CommentDialect) -> Grammar {
        Grammar::new(dialect, &["caveat"], false, false).unwrap()
    }

    #[test]
    fn test_well_formed_assumption() {
        let text = "  # Assumption: Rates are fixed\n  # Q: Medium\n  # I: High\n  # Rates come\n  #   from 2020.\nx = 1\n";
        let found = assumption_grammar().find_all(text);
        assert_eq!(
            found,
            vec![MatchFields {
                indent: "  ".to_string(),
                dialect: CommentDialect::Hash,
                title: "Rates are fixed".to_string(),
                quality: Some("Medium".to_string()),
                impact: Some("High".to_string()),
                detail: "  # Rates come\n  #   from 2020.\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_assumption_requires_ratings_and_detail() {
        let g = assumption_grammar();
        assert!(g.find_all("# Assumption: a\n# Impact: Low\n# detail\n").is_empty());
        assert!(g.find_all("# Assumption: a\n# Quality: Low\n# Impact: Low\ncode()\n").is_empty());
    }

    #[test]
    fn test_ratings_must_share_indent() {
        let text = "    # Assumption: a\n  # Quality: Low\n  # Impact: Low\n    # detail\n";
        assert!(assumption_grammar().find_all(text).is_empty());
    }

    #[test]
    fn test_case_insensitive_keywords() {
        let text = "# ASSUME: upper\n# quality: ok\n# IMPACT: low\n# body\n";
        let found = assumption_grammar().find_all(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "upper");
    }

    #[test]
    fn test_indentation_isolation() {
        let text = "    # Caveat: inner\n    # kept\n  # shallower\n# top\n";
        let found = caveat_grammar(CommentDialect::Hash).find_all(text);
        assert_eq!(found[0].detail, "    # kept\n");
    }

    #[test]
    fn test_deeper_line_ends_block() {
        let text = "# Caveat: outer\n# one\n    # Caveat: nested\n    # two\n";
        let found = caveat_grammar(CommentDialect::Hash).find_all(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].detail, "# one\n");
        assert_eq!(found[1].indent, "    ");
        assert_eq!(found[1].detail, "    # two\n");
    }

    #[test]
    fn test_block_at_end_of_file_without_newline() {
        let found = caveat_grammar(CommentDialect::Hash).find_all("# Caveat: eof\n# last");
        assert_eq!(found[0].detail, "# last\n");
    }

    #[test]
    fn test_hash_grammar_ignores_roxygen_header() {
        let text = "#' Caveat: roxygen\n#' more\n";
        assert!(caveat_grammar(CommentDialect::Hash).find_all(text).is_empty());
        let found = caveat_grammar(CommentDialect::Roxygen).find_all(text);
        assert_eq!(found[0].title, "roxygen");
        assert_eq!(found[0].line_prefix(), "#'");
    }

    #[test]
    fn test_multi_word_keyword() {
        let g = Grammar::new(CommentDialect::DoubleSlash, &["tech debt"], false, false).unwrap();
        let found = g.find_all("  // Tech  Debt: copy paste\n");
        assert_eq!(found[0].title, "copy paste");
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let result = Grammar::new(CommentDialect::Hash, &["  "], false, false);
        assert!(matches!(result, Err(LogError::InvalidLogItem { .. })));
    }

    #[test]
    fn test_merge_orders_dialects_by_text_position() {
        let grammars = vec![
            caveat_grammar(CommentDialect::Hash),
            caveat_grammar(CommentDialect::Roxygen),
        ];
        let text = "#' Caveat: first\ncode()\n# Caveat: second\n";
        let titles: Vec<String> = match_grammars(&grammars, text)
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_merge_drops_overlapping_span() {
        let grammars = vec![
            caveat_grammar(CommentDialect::Hash),
            caveat_grammar(CommentDialect::Roxygen),
        ];
        // The roxygen header sits inside the hash block's detail lines.
        let text = "# Caveat: outer\n#' Caveat: inner\n#' text\n";
        let found = match_grammars(&grammars, text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "outer");
    }
}
