//! CLI-level tests for the sigsum binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sigsum() -> Command {
    Command::cargo_bin("sigsum").unwrap()
}

#[test]
fn help_lists_subcommands() {
    sigsum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn export_rejects_invalid_start_date() {
    sigsum()
        .args(["export", "--start", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start date"));
}

#[test]
fn export_rejects_invalid_end_date() {
    sigsum()
        .args(["export", "--end", "02/29/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid end date"));
}

#[test]
fn summarize_missing_file_suggests_export() {
    sigsum()
        .args(["summarize", "--markdown-path", "/definitely/not/here/chat.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("sigsum export"));
}

#[test]
fn summarize_empty_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let markdown = temp.path().join("chat.md");
    fs::write(&markdown, "   \n").unwrap();

    sigsum()
        .args(["summarize", "--markdown-path"])
        .arg(&markdown)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is empty"));
}

#[test]
fn summarize_zero_marker_transcript_writes_empty_report() {
    let temp = TempDir::new().unwrap();
    let markdown = temp.path().join("chat.md");
    let report = temp.path().join("summary.md");
    fs::write(&markdown, "notes without any timestamps\n").unwrap();

    sigsum()
        .env("OPENAI_API_KEY", "test-key")
        .args(["summarize", "--markdown-path"])
        .arg(&markdown)
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 messages across 0 days"));

    assert_eq!(fs::read_to_string(&report).unwrap(), "");
}

#[test]
fn summarize_without_api_key_fails_with_guidance() {
    let temp = TempDir::new().unwrap();
    let markdown = temp.path().join("chat.md");
    fs::write(&markdown, "[2024-01-01 10:00:00] hello\n").unwrap();

    sigsum()
        .env_remove("OPENAI_API_KEY")
        .args(["summarize", "--markdown-path"])
        .arg(&markdown)
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}
