//! Tests for the extractor - directory walk, filtering and skipping.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use assumptions_log::{
    CommentDialect, ExtractionSession, Extractor, LogError, LogItemRegistry, LogType,
};

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "project/analysis.py",
        b"# Assumption: Config defaults to UTC\n# Quality: High\n# Impact: Low\n# Detail spans\n# two lines.\ncode_here()\n",
    );
    write(
        dir.path(),
        "project/R/plots.r",
        b"#' Caveat: Axis labels are English only\n#' Translation is pending.\nplot(x)\n",
    );
    dir
}

#[test]
fn test_paths_include_root_name() {
    let dir = project();
    let registry = LogItemRegistry::for_log_type(LogType::AssumptionsCaveats).unwrap();
    let mut session = ExtractionSession::new(&registry);

    let stats = Extractor::new(&registry)
        .find(&dir.path().join("project"), "", &mut session)
        .unwrap();

    assert_eq!(stats.files_scanned, 2);
    assert_eq!(stats.matches, 2);

    let assumptions = session.matched(0);
    assert_eq!(assumptions.len(), 1);
    assert_eq!(assumptions[0].file_path, "project/analysis.py");
    let fields = &assumptions[0].fields;
    assert_eq!(fields.indent, "");
    assert_eq!(fields.title, "Config defaults to UTC");
    assert_eq!(fields.quality.as_deref(), Some("High"));
    assert_eq!(fields.impact.as_deref(), Some("Low"));
    assert_eq!(fields.detail, "# Detail spans\n# two lines.\n");

    let caveats = session.matched(1);
    assert_eq!(caveats.len(), 1);
    assert_eq!(caveats[0].file_path, "project/R/plots.r");
    assert_eq!(caveats[0].fields.dialect, CommentDialect::Roxygen);
}

#[test]
fn test_extension_filter() {
    let dir = project();
    let registry = LogItemRegistry::for_log_type(LogType::AssumptionsCaveats).unwrap();
    let mut session = ExtractionSession::new(&registry);

    let stats = Extractor::new(&registry)
        .find(&dir.path().join("project"), ".py", &mut session)
        .unwrap();

    assert_eq!(stats.files_scanned, 1);
    assert_eq!(session.matched(0).len(), 1);
    assert!(session.matched(1).is_empty());
}

#[test]
fn test_unreadable_file_is_skipped() {
    let dir = project();
    write(dir.path(), "project/aaa_binary.py", b"# Caveat: hidden\x00\x01\n");
    write(dir.path(), "project/bad_utf8.py", b"# Caveat: caf\xe9\n");
    let registry = LogItemRegistry::for_log_type(LogType::AssumptionsCaveats).unwrap();
    let mut session = ExtractionSession::new(&registry);

    let stats = Extractor::new(&registry)
        .find(&dir.path().join("project"), "", &mut session)
        .unwrap();

    assert_eq!(stats.files_skipped, 2);
    assert_eq!(session.matched(0).len(), 1);
    assert_eq!(session.matched(1).len(), 1);
}

#[test]
fn test_size_limit_skips_file() {
    let dir = project();
    let registry = LogItemRegistry::for_log_type(LogType::AssumptionsCaveats).unwrap();
    let mut session = ExtractionSession::new(&registry);

    let stats = Extractor::new(&registry)
        .with_max_file_bytes(8)
        .find(&dir.path().join("project"), "", &mut session)
        .unwrap();

    assert_eq!(stats.files_scanned, 0);
    assert_eq!(stats.files_skipped, 2);
    assert_eq!(session.total_matches(), 0);
}

#[test]
fn test_discovery_order_is_sorted() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/b.py", b"# TODO: second\n");
    write(dir.path(), "src/a.py", b"# TODO: first\nx\n# TODO: also first file\n");
    write(dir.path(), "src/c/d.py", b"# TODO: third\n");
    let registry = LogItemRegistry::for_log_type(LogType::TodoList).unwrap();
    let mut session = ExtractionSession::new(&registry);

    Extractor::new(&registry)
        .find(&dir.path().join("src"), "py", &mut session)
        .unwrap();

    let titles: Vec<&str> = session
        .matched(0)
        .iter()
        .map(|m| m.fields.title.as_str())
        .collect();
    assert_eq!(titles, vec!["first", "also first file", "second", "third"]);
    assert_eq!(session.matched(0)[3].file_path, "src/c/d.py");
}

#[test]
fn test_missing_search_root() {
    let dir = TempDir::new().unwrap();
    let registry = LogItemRegistry::for_log_type(LogType::TodoList).unwrap();
    let mut session = ExtractionSession::new(&registry);

    let result = Extractor::new(&registry).find(&dir.path().join("nope"), "", &mut session);
    assert!(matches!(result, Err(LogError::SearchRoot { .. })));
}
