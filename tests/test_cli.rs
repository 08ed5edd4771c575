//! Tests for the rpnexpr binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn rpnexpr() -> Command {
    let mut cmd = Command::cargo_bin("rpnexpr").unwrap();
    cmd.env_remove("RPNEXPR_STRICT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_command_prints_result() {
    rpnexpr()
        .args(["-c", "2 2 +"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_command_joins_arguments() {
    rpnexpr()
        .args(["-c", "4097", "8192", "roundup"])
        .assert()
        .success()
        .stdout("8192\n");
}

#[test]
fn test_command_empty_stack() {
    rpnexpr()
        .args(["-c", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Empty stack"));
}

#[test]
fn test_strict_flag() {
    rpnexpr()
        .args(["--strict", "-c", "x 1 +"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number 'x'"));
}

#[test]
fn test_strict_env() {
    rpnexpr()
        .env("RPNEXPR_STRICT", "1")
        .args(["-c", "x 1 +"])
        .assert()
        .failure();
}

#[test]
fn test_lenient_by_default() {
    rpnexpr()
        .args(["-c", "x 1 +"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_file_evaluates_each_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# sizes").unwrap();
    writeln!(file, "4095 4096 roundup").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "leftover 1 2 +").unwrap();
    writeln!(file, "str cat strcat").unwrap();

    rpnexpr()
        .arg(file.path())
        .assert()
        .success()
        .stdout("4096\n3\nstrcat\n");
}

#[test]
fn test_file_reports_failing_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1 1 +").unwrap();
    writeln!(file, "1 0 /").unwrap();
    writeln!(file, "2 2 +").unwrap();

    rpnexpr()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("2\n")
        .stderr(predicate::str::contains("Error at line 2: /: division by zero"));
}

#[test]
fn test_missing_file() {
    rpnexpr()
        .arg("/nonexistent/values.rpn")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn test_list_operators() {
    rpnexpr()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("roundup").and(predicate::str::contains("hostbase")));
}

#[test]
fn test_trace_logs_to_stderr() {
    rpnexpr()
        .args(["--trace", "-c", "1 dup +"])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("dup"));
}

#[test]
fn test_version() {
    rpnexpr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rpnexpr-"));
}
