//! Tests for the assumptions binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn assumptions(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_assumptions"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("project")).unwrap();
    fs::write(
        dir.path().join("project/config.py"),
        "# Assumption: Config defaults to UTC\n# Quality: High\n# Impact: Low\n# Detail spans\n# two lines.\ncode_here()\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_write_then_nudge() {
    let dir = project();

    let first = assumptions(&dir, &["-p", "project"]);
    assert!(first.status.success());
    assert!(String::from_utf8_lossy(&first.stdout).contains("Log items documented in"));
    let log = fs::read_to_string(dir.path().join("assumptions_caveats_log.md")).unwrap();
    assert!(log.contains("### Assumption 1: Config defaults to UTC"));
    assert!(log.contains("`project/config.py`"));

    let second = assumptions(&dir, &["-p", "project"]);
    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stdout).contains("Nudge"));
}

#[test]
fn test_unknown_log_type_fails_before_writing() {
    let dir = project();
    let output = assumptions(&dir, &["-l", "nope", "-o", "out.md"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a valid log type"));
    assert!(!dir.path().join("out.md").exists());
}

#[test]
fn test_check_reports_stale_log() {
    let dir = project();
    let output = assumptions(&dir, &["-p", "project", "--check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("assumptions_caveats_log.md").exists());
}

#[test]
fn test_check_passes_on_current_log() {
    let dir = project();
    assert!(assumptions(&dir, &["-p", "project"]).status.success());
    let log_path = dir.path().join("assumptions_caveats_log.md");
    let before = fs::read_to_string(&log_path).unwrap();

    let output = assumptions(&dir, &["-p", "project", "--check"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Nudge"));
    assert_eq!(fs::read_to_string(&log_path).unwrap(), before);
}

#[test]
fn test_unknown_log_type_reported_before_config() {
    let dir = project();
    fs::write(dir.path().join(".assumptions.yaml"), "log_type: [unclosed\n").unwrap();
    let output = assumptions(&dir, &["-l", "nope"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope is not a valid log type"));
    assert!(!stderr.contains(".assumptions.yaml"));
}

#[test]
fn test_config_file_selects_todo_list() {
    let dir = project();
    fs::write(
        dir.path().join("project/tasks.py"),
        "# TODO: Replace with an\n#   actual arg parser\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".assumptions.yaml"),
        "log_type: todo_list\npath: project\nextension: py\n",
    )
    .unwrap();

    let output = assumptions(&dir, &[]);
    assert!(output.status.success());
    let todos = fs::read_to_string(dir.path().join("todo_list.md")).unwrap();
    assert!(todos.contains("- [ ] Replace with an actual arg parser"));
}
