//! Integration tests for the `tt` binary.
//!
//! Only paths that exit before the terminal UI starts are exercised here:
//! `--help`, `--version`, and startup failures.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `tt` binary.
fn tt_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tt");
    path
}

/// Run `tt` with config and state dirs pointed into `dir`.
fn run_tt(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tt_bin())
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_STATE_HOME", dir.join("state"))
        .output()
        .expect("failed to run tt");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_help_lists_flags() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (stdout, _, success) = run_tt(tmp.path(), &["--help"]);
    assert!(success);
    assert!(stdout.contains("tubetasker"));
    for flag in [
        "--config",
        "--long-press-ms",
        "--drag-threshold",
        "--no-sample",
        "--log-level",
        "--log-dir",
    ] {
        assert!(stdout.contains(flag), "missing {flag} in:\n{stdout}");
    }
}

#[test]
fn test_version() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (stdout, _, success) = run_tt(tmp.path(), &["--version"]);
    assert!(success);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_explicit_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_tt(tmp.path(), &["--config", "nope.toml"]);
    assert!(!success);
    assert!(stderr.starts_with("error:"), "{stderr}");
    assert!(stderr.contains("nope.toml"));
}

#[test]
fn test_malformed_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("bad.toml");
    fs::write(&path, "[gesture\nlong_press_ms = 800\n").unwrap();

    let (_, stderr, success) = run_tt(tmp.path(), &["--config", "bad.toml"]);
    assert!(!success);
    assert!(stderr.contains("error: could not parse config"), "{stderr}");
}

#[test]
fn test_invalid_default_emoji_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[board]\ndefault_emoji = \"ab\"\n").unwrap();

    let (_, stderr, success) = run_tt(tmp.path(), &["--config", "config.toml"]);
    assert!(!success);
    assert!(stderr.contains("default_emoji"), "{stderr}");
}

#[test]
fn test_unknown_log_level_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("empty.toml"), "").unwrap();

    let (_, stderr, success) = run_tt(
        tmp.path(),
        &["--config", "empty.toml", "--log-level", "loud"],
    );
    assert!(!success);
    assert!(stderr.contains("unsupported log level"), "{stderr}");
}

#[test]
fn test_zero_drag_threshold_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_tt(tmp.path(), &["--drag-threshold", "0"]);
    assert!(!success);
    assert!(stderr.contains("--drag-threshold"));
}
