//! End-to-end tests for the `pwd-rules` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn pwd_rules() -> Command {
    let mut cmd = Command::cargo_bin("pwd-rules").expect("binary should be built");
    cmd.env_remove("PWD_GENERATE_LENGTH").env_remove("RUST_LOG");
    cmd
}

/// Returns the first stdout line of a successful run.
fn first_line(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run pwd-rules");
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .expect("stdout should be UTF-8")
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn test_evaluate_strongest_argument() {
    pwd_rules()
        .args(["evaluate", "Abcdefg1!", "--tips", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength: 4/4"))
        .stdout(predicate::str::contains("dragon"));
}

#[test]
fn test_evaluate_empty_argument_exits_zero() {
    pwd_rules()
        .args(["evaluate", "", "--tips", "0"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Strength: 0/4"));
}

#[test]
fn test_evaluate_reads_stdin_and_strips_newline() {
    // With the newline kept, "abcdefg" would be 8 chars and score 1
    pwd_rules()
        .args(["evaluate", "--tips", "0"])
        .write_stdin("abcdefg\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength: 0/4"));
}

#[test]
fn test_evaluate_reads_stdin_and_strips_crlf() {
    pwd_rules()
        .args(["evaluate", "--tips", "0"])
        .write_stdin("abcdefg\r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength: 0/4"));
}

#[test]
fn test_evaluate_prints_requested_tips() {
    pwd_rules()
        .args(["evaluate", "abc", "--tips", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tips:"));
}

#[test]
fn test_generate_exact_length() {
    let line = first_line(pwd_rules().args(["generate", "--length", "16"]));
    assert_eq!(line.chars().count(), 16);
}

#[test]
fn test_generate_default_length_from_env() {
    let line = first_line(
        pwd_rules()
            .env("PWD_GENERATE_LENGTH", "9")
            .arg("generate"),
    );
    assert_eq!(line.chars().count(), 9);
}

#[test]
fn test_generate_default_length() {
    let line = first_line(pwd_rules().arg("generate"));
    assert_eq!(line.chars().count(), 12);
}

#[test]
fn test_generate_with_evaluate_prints_score() {
    pwd_rules()
        .args(["generate", "--length", "10", "--evaluate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength: "));
}

#[test]
fn test_generate_zero_length_is_usage_error() {
    pwd_rules()
        .args(["generate", "--length", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_generate_non_integer_length_is_usage_error() {
    pwd_rules()
        .args(["generate", "--length", "ten"])
        .assert()
        .code(2);
}

#[test]
fn test_generate_invalid_env_length_fails() {
    pwd_rules()
        .env("PWD_GENERATE_LENGTH", "0")
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PWD_GENERATE_LENGTH"));
}
