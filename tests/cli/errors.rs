//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-device"));
}

#[test]
fn test_create_help_lists_options() {
    let t = Test::new();

    t.cmd()
        .args(["create-device", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--dry-run")
                .and(predicate::str::contains("--force"))
                .and(predicate::str::contains("--type"))
                .and(predicate::str::contains("--op")),
        );
}

#[test]
fn test_missing_name_fails() {
    let t = Test::new();

    t.cmd()
        .arg("create-device")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<NAME>"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "homecfg");
}

#[test]
fn test_new_alias() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["new", "Loft", "--dry-run"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_signed_out_is_auth_error() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["create-device", "Loft", "--force"])
        .env("FAKE_OP_SIGNED_OUT", "1")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "op is not signed in");
    assert_stderr_contains(&output, "signin");
    assert!(t.entries().is_empty());
}

#[test]
fn test_missing_secrets_manager() {
    let t = Test::new();

    let output = t.create_force("Loft", &["--op", "/nonexistent/op"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "required executable not found: /nonexistent/op");
    assert!(t.entries().is_empty());
}

#[test]
fn test_op_override_from_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["create-device", "Loft", "--force"])
        .env("HOMECFG_OP", "op-not-installed")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "op-not-installed");
}

#[test]
fn test_edit_failure_reports_tool_error() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["create-device", "Loft", "--force"])
        .env("FAKE_OP_EDIT_FAIL", "1")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "op failed to update item 'ESPHome'");
    assert!(t.entries().is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "create-device", "Loft", "--dry-run"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    // Secrets never reach the log
    assert!(!stderr(&output).contains(FAKE_KEY));
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();

    let output = t.create("Loft", &["--dry-run"]);
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG") && !err.contains("INFO"));
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_homecfg") || out.contains("complete"));
}

#[test]
fn test_completions_fish() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "fish"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("complete") && out.contains("homecfg"));
}
