//! End-to-end tests for the softup CLI
//!
//! These tests verify:
//! - Fatal configuration errors abort with exit code 1
//! - Per-package failures give exit code 2 with a full report
//! - Text and JSON report output
//!
//! Configurations here only use unknown sources so no request leaves the machine.

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn softup() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("softup"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("packages.json");
    fs::write(&path, content).unwrap();
    path
}

const OFFLINE_CONFIG: &str = r#"{
    "left-pad": {"source": "npm", "stable": "1.3.0"},
    "serde": {"source": "crates"}
}"#;

#[test]
fn test_missing_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    softup()
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn test_default_config_path() {
    let dir = TempDir::new().unwrap();
    softup()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("packages.json"));
}

#[test]
fn test_invalid_json_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[1, 2, 3]");
    softup()
        .arg(path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse JSON"));
}

#[test]
fn test_empty_config_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{}");
    softup()
        .arg(path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 checked, 0 updated, 0 failed"));
}

#[test]
fn test_unknown_sources_reported_per_package() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, OFFLINE_CONFIG);
    softup()
        .arg(path)
        .arg("--no-progress")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("unknown source 'npm'"))
        .stdout(predicate::str::contains("2 checked, 0 updated, 2 failed"))
        .stdout(predicate::str::contains("Failed: left-pad, serde"))
        .stderr(predicate::str::contains("No info found for package left-pad"));
}

#[test]
fn test_quiet_suppresses_package_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, OFFLINE_CONFIG);
    softup()
        .arg(path)
        .arg("--quiet")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[error]").not())
        .stdout(predicate::str::starts_with("2 checked"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, OFFLINE_CONFIG);
    let output = softup().arg(path).arg("--json").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["checked"], 2);
    assert_eq!(json["failed"], serde_json::json!(["left-pad", "serde"]));
    assert_eq!(json["events"][0]["kind"], "error");
}

#[test]
fn test_verbose_and_quiet_conflict() {
    softup()
        .args(["--verbose", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
