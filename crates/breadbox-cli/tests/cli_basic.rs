//! Basic CLI E2E tests.
//!
//! Invokes the CLI via cargo run against a temporary data directory.

use std::path::Path;
use std::process::Command;

fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "breadbox-cli", "--"])
        .args(args)
        .env("BREADBOX_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn timer_status_reports_idle_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(code, 0);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["status"], "idle");
    assert_eq!(snapshot["mode"], "focus");
    assert_eq!(snapshot["seconds_left"], 25 * 60);
}

#[test]
fn timer_start_persists_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["timer", "start"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("TimerStarted"));

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(code, 0);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["status"], "running");
}

#[test]
fn award_updates_bakery_status() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["bakery", "award", "PlainBread", "--seconds", "1500"]);
    assert_eq!(code, 0);
    let outcome: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(outcome["xp_gained"], 10);

    let (stdout, _, code) = run_cli(dir.path(), &["bakery", "status"]);
    assert_eq!(code, 0);
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["experience"], 10);
    assert_eq!(status["bread_counts"]["PlainBread"], 1);
}

#[test]
fn settings_goal_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["settings", "set-goal", "10"]);
    assert_eq!(code, 0);
    let view: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(view["daily_focus_goal_minutes"], 25);
}
