//! Smoke tests for the pocket-calc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pocket_calc() -> Command {
    let mut cmd = Command::cargo_bin("pocket-calc").expect("pocket-calc binary should exist");
    cmd.env_remove("RUST_LOG").env_remove("POCKET_CALC_CONFIG");
    cmd
}

// ============================================================================
// Basic CLI
// ============================================================================

#[test]
fn test_version_flag() {
    pocket_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    pocket_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("keys"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_no_args_fails() {
    pocket_calc().assert().failure();
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_chained() {
    pocket_calc()
        .args(["eval", "2+3*4="])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_eval_rounding() {
    pocket_calc()
        .args(["eval", "0.1+0.2="])
        .assert()
        .success()
        .stdout("0.3\n");
}

#[test]
fn test_eval_division_by_zero_prints_marker() {
    pocket_calc()
        .args(["eval", "5/0="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_eval_multiple_arguments_share_state() {
    pocket_calc()
        .args(["eval", "12+", "3="])
        .assert()
        .success()
        .stdout("15\n");
}

#[test]
fn test_eval_script_starting_with_operator() {
    pocket_calc()
        .args(["eval", "5", "-3="])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_keys_operator_values() {
    pocket_calc()
        .args(["keys", "-", "8", "="])
        .assert()
        .success()
        .stdout("-8\n");
}

#[test]
fn test_eval_trace() {
    pocket_calc()
        .args(["eval", "--trace", "7="])
        .assert()
        .success()
        .stdout(predicate::str::contains("7 -> 7"))
        .stdout(predicate::str::contains("= -> 7 (ignored)"));
}

#[test]
fn test_eval_json_transcript() {
    let output = pocket_calc()
        .args(["eval", "--json", "6*7="])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["display"], "42");
    assert_eq!(json["steps"].as_array().unwrap().len(), 4);
    assert_eq!(json["history"][0]["result"], "42");
}

#[test]
fn test_eval_unknown_token_fails() {
    pocket_calc()
        .args(["eval", "2^3="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown token"));
}

// ============================================================================
// keys
// ============================================================================

#[test]
fn test_keys() {
    pocket_calc()
        .args(["keys", "9", "-", "4", "Enter"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_keys_unknown_are_ignored() {
    pocket_calc()
        .args(["keys", "1", "Tab", "2", "Backspace", "Backspace", "8"])
        .assert()
        .success()
        .stdout("8\n");
}

// ============================================================================
// repl
// ============================================================================

#[test]
fn test_repl_reads_stdin() {
    pocket_calc()
        .arg("repl")
        .write_stdin("2*\n21=\nhistory\nquit\n")
        .assert()
        .success()
        .stdout("2 *  2\n42\n2 * 21 = 42\n");
}

#[test]
fn test_repl_reports_errors_and_continues() {
    pocket_calc()
        .arg("repl")
        .write_stdin("abc\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: Unknown token"))
        .stdout(predicate::str::ends_with("5\n"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_defaults() {
    pocket_calc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_display_len: 15"))
        .stdout(predicate::str::contains("precision: 5"));
}

#[test]
fn test_config_file_applies() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.yaml");
    fs::write(&path, "precision: 2\nmax_display_len: 4\n").unwrap();

    pocket_calc()
        .arg("eval")
        .arg("--config")
        .arg(&path)
        .arg("2/3=")
        .assert()
        .success()
        .stdout("0.67\n");

    pocket_calc()
        .arg("eval")
        .arg("--config")
        .arg(&path)
        .arg("123456")
        .assert()
        .success()
        .stdout("1234\n");
}

#[test]
fn test_config_file_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.yaml");
    fs::write(&path, "precision: 42\n").unwrap();

    pocket_calc()
        .arg("config")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("precision"));
}

#[test]
fn test_config_json() {
    let output = pocket_calc().args(["config", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["calculator"]["history_capacity"], 100);
}

// ============================================================================
// logging
// ============================================================================

#[test]
fn test_log_file_receives_token_logs() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("calc.log");

    pocket_calc()
        .args(["eval", "-v", "--log-file"])
        .arg(&log)
        .arg("1+1=")
        .assert()
        .success()
        .stdout("2\n")
        .stderr("");

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("token applied"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    pocket_calc()
        .args(["eval", "-v", "--color", "never", "1+1="])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("token applied"));
}
