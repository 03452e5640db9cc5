//! Integration tests for the parsim CLI surface

mod common;

use std::fs;

use common::parsim;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    parsim()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: parsim"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("segment"));
}

#[test]
fn test_version_flag() {
    parsim()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("parsim"));
}

#[test]
fn test_subcommand_help() {
    parsim()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyze a corpus directory"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    parsim()
        .args(["--format", "records", "segment"])
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    parsim()
        .args(["--format", "json", "segment", "--bogus-flag", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_empty_input_directory_exit_code_3() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    parsim()
        .args(["run", "--endpoint", "http://127.0.0.1:1"])
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no input articles found"));
}

#[test]
fn test_empty_input_json_error_envelope() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    parsim()
        .args(["--format", "json", "run", "--endpoint", "http://127.0.0.1:1"])
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"no_input_found\""));
}

#[test]
fn test_missing_endpoint_exit_code_1() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("a.txt"), "some text").unwrap();
    let output = tempdir().unwrap();
    parsim()
        .arg("run")
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .env_remove("PARSIM_EMBEDDING_URL")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("embedding unavailable"));
}

#[test]
fn test_unreachable_endpoint_exit_code_1() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("a.txt"), "some text").unwrap();
    let output = tempdir().unwrap();
    parsim()
        .args(["run", "--endpoint", "http://127.0.0.1:1", "--timeout", "2"])
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("embedding unavailable"));
}

#[test]
fn test_zero_top_k_exit_code_2() {
    let input = tempdir().unwrap();
    fs::write(input.path().join("a.txt"), "some text").unwrap();
    let output = tempdir().unwrap();
    parsim()
        .args(["run", "--top-k", "0", "--endpoint", "http://127.0.0.1:1"])
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("top_k"));
}

// ============================================================================
// Segment command
// ============================================================================

#[test]
fn test_segment_drops_numeric_headers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("article.txt");
    fs::write(&path, "1. Intro\nHello world\n\nGoodbye").unwrap();

    parsim()
        .arg("segment")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0  Hello world"))
        .stdout(predicate::str::contains("1  Goodbye"));
}

#[test]
fn test_segment_json_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("article.txt");
    fs::write(&path, "alpha\n\nbeta").unwrap();

    let output = parsim()
        .args(["--format", "json", "segment"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let paragraphs: Vec<String> = serde_json::from_slice(&output).unwrap();
    assert_eq!(paragraphs, vec!["alpha", "beta"]);
}

#[test]
fn test_segment_missing_file_exit_code_1() {
    let dir = tempdir().unwrap();
    parsim()
        .arg("segment")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1);
}
