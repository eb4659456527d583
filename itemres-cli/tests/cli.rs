//! Integration tests for the itemres CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("itemres").expect("Failed to find itemres binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("itemres").expect("Failed to find itemres binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("itemres"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("itemres").expect("Failed to find itemres binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Resolve request paths to content-tree nodes",
        ))
        .stdout(predicate::str::contains("candidates"))
        .stdout(predicate::str::contains("show-config"));
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("itemres").expect("Failed to find itemres binary");

    cmd.arg("invalid-command");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

/// Test that resolve requires a fixture.
#[test]
fn test_resolve_requires_tree() {
    let mut cmd = Command::cargo_bin("itemres").expect("Failed to find itemres binary");

    cmd.args(["resolve", "/home"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--tree"));
}

/// Test that completions are generated for the installed binary name.
#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("itemres").expect("Failed to find itemres binary");

    cmd.args(["completions", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("itemres"));
}
