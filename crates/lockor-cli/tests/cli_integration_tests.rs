//! CLI integration tests
//!
//! Drive the built `lockor` binary against a temporary workspace.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn lockor(workspace: &TempDir, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_lockor");
    Command::new(cli_bin)
        .arg("--workspace")
        .arg(workspace.path())
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_lock_check_save_unlock() {
    let temp_dir = TempDir::new().unwrap();

    let output = lockor(&temp_dir, &["lock", "config.js"]);
    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Locked:"));

    let output = lockor(&temp_dir, &["is-locked", "config.js"]);
    assert_eq!(stdout(&output).trim(), "true");

    let output = lockor(&temp_dir, &["check-save", "config.js"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
    assert!(stderr(&output).contains("ERR_SAVE_BLOCKED"));

    let output = lockor(&temp_dir, &["unlock", "config.js"]);
    assert!(output.status.success());

    let output = lockor(&temp_dir, &["check-save", "config.js"]);
    assert!(output.status.success(), "Stderr: {}", stderr(&output));
}

#[test]
fn test_cli_blank_path_is_unlocked() {
    let temp_dir = TempDir::new().unwrap();
    lockor(&temp_dir, &["lock", "config.js"]);

    let output = lockor(&temp_dir, &["check-save", ""]);
    assert!(output.status.success(), "Stderr: {}", stderr(&output));

    let output = lockor(&temp_dir, &["is-locked", ""]);
    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "false");
}

#[test]
fn test_cli_double_lock_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();

    lockor(&temp_dir, &["lock", "a.rs"]);
    let output = lockor(&temp_dir, &["lock", "a.rs"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Already locked"));
}

#[test]
fn test_cli_list_and_toggle() {
    let temp_dir = TempDir::new().unwrap();

    let output = lockor(&temp_dir, &["list"]);
    assert!(stdout(&output).contains("No locked files"));

    lockor(&temp_dir, &["toggle", "src/b.rs"]);
    lockor(&temp_dir, &["lock", "a.rs"]);

    let output = lockor(&temp_dir, &["list"]);
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["a.rs".to_string(), "src/b.rs".to_string()]);

    lockor(&temp_dir, &["toggle", "src/b.rs"]);
    let output = lockor(&temp_dir, &["list"]);
    assert_eq!(stdout(&output).trim(), "a.rs");
}

#[test]
fn test_cli_status_json() {
    let temp_dir = TempDir::new().unwrap();
    lockor(&temp_dir, &["lock", "a.rs"]);

    let output = lockor(&temp_dir, &["status", "a.rs", "--json"]);
    assert!(output.status.success(), "Stderr: {}", stderr(&output));

    let status: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(status["isLocked"], true);
    assert_eq!(status["protectionLevel"], "ai-aware");
    assert_eq!(status["canAIModify"], false);
    assert_eq!(status["canSave"], false);
    assert_eq!(status["lockedFileCount"], 1);
}

#[test]
fn test_cli_level_show_and_set() {
    let temp_dir = TempDir::new().unwrap();

    let output = lockor(&temp_dir, &["level"]);
    assert_eq!(stdout(&output).trim(), "ai-aware");

    let output = lockor(&temp_dir, &["level", "SOFT"]);
    assert!(output.status.success(), "Stderr: {}", stderr(&output));

    let output = lockor(&temp_dir, &["level"]);
    assert_eq!(stdout(&output).trim(), "soft");

    let settings = fs::read_to_string(temp_dir.path().join(".lockor/settings.toml")).unwrap();
    assert!(settings.contains("protectionLevel = \"soft\""));
}

#[test]
fn test_cli_invalid_level_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = lockor(&temp_dir, &["level", "paranoid"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn test_cli_writes_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    lockor(&temp_dir, &["lock", "a.rs"]);

    let rule = temp_dir
        .path()
        .join(".cursor/rules/lockor-locked-files.mdc");
    assert!(fs::read_to_string(rule).unwrap().contains("globs: a.rs"));
    assert!(temp_dir.path().join(".lockor/status.md").exists());

    let output = lockor(&temp_dir, &["reapply"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("applied to 1 locked files"));
}

#[test]
fn test_cli_missing_workspace_fails() {
    let temp_dir = TempDir::new().unwrap();
    let cli_bin = env!("CARGO_BIN_EXE_lockor");

    let output = Command::new(cli_bin)
        .arg("--workspace")
        .arg(temp_dir.path().join("missing"))
        .arg("list")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ERR_WORKSPACE_ROOT_MISSING"));
}
