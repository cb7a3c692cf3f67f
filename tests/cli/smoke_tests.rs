use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_version-ctl"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("raise"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn missing_action_is_a_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_version-ctl")).assert().code(2);
}

#[test]
fn unknown_action_is_a_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_version-ctl"))
        .arg("bump")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bump"));
}
