//! End-to-end tests driving the `left-rotation` binary over stdin/stdout.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Helper to get the binary path.
fn bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_left-rotation"))
}

/// Run the binary with `args`, feeding `input` on stdin.
fn run(args: &[&str], input: &str) -> Output {
    run_with_log(args, input, None)
}

/// Like [`run`], with `RUST_LOG` set to `log` when given.
fn run_with_log(args: &[&str], input: &str, log: Option<&str>) -> Output {
    let mut command = Command::new(bin());
    command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG");
    if let Some(log) = log {
        command.env("RUST_LOG", log);
    }

    let mut child = command
        .spawn()
        .expect("failed to spawn left-rotation");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait on left-rotation")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ================================================================
// normal runs
// ================================================================

#[test]
fn rotates_by_two() {
    let output = run(&[], "5 2\n1 2 3 4 5\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3 4 5 1 2\n");
}

#[test]
fn zero_and_full_rotation() {
    assert_eq!(stdout(&run(&[], "5 0\n1 2 3 4 5\n")), "1 2 3 4 5\n");
    assert_eq!(stdout(&run(&[], "5 5\n1 2 3 4 5\n")), "1 2 3 4 5\n");
}

#[test]
fn empty_sequence_prints_empty_line() {
    let output = run(&[], "0 0\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn every_strategy_gives_same_answer() {
    for strategy in ["block-copy", "index-map", "in-place"] {
        let output = run(&["--strategy", strategy], "6 4\n1 2 3 4 5 6");
        assert!(output.status.success(), "{strategy}");
        assert_eq!(stdout(&output), "5 6 1 2 3 4\n", "{strategy}");
    }
}

// ================================================================
// bounds policy
// ================================================================

#[test]
fn out_of_range_count_fails_by_default() {
    let output = run(&[], "3 4\n1 2 3\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"));
}

#[test]
fn wrap_policy() {
    let output = run(&["--policy", "wrap"], "3 4\n1 2 3\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2 3 1\n");
}

#[test]
fn clamp_policy() {
    let output = run(&["--policy", "clamp"], "3 -2\n1 2 3\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 2 3\n");
}

#[test]
fn unknown_policy_is_usage_error() {
    let output = run(&["--policy", "bounce"], "1 0\n1\n");
    assert!(!output.status.success());
}

#[test]
fn wrap_policy_accepts_count_wider_than_i64() {
    let output = run(&["--policy", "wrap"], "3 99999999999999999999\n1 2 3\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 2 3\n");
}

// ================================================================
// diagnostics
// ================================================================

#[test]
fn warns_about_trailing_tokens_and_adjusted_count() {
    let output = run_with_log(&["--policy", "wrap"], "3 4\n1 2 3 9 9\n", Some("warn"));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2 3 1\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ignoring tokens after the last element"), "{stderr}");
    assert!(stderr.contains("rotation count adjusted"), "{stderr}");
}

#[test]
fn warnings_stay_off_stdout() {
    let output = run_with_log(&["--policy", "clamp"], "2 7\n1 2 3\n", Some("warn"));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 2\n");
}

#[test]
fn in_range_input_logs_no_warnings() {
    let output = run_with_log(&[], "3 1\n1 2 3\n", Some("warn"));
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("WARN"));
}

// ================================================================
// malformed input
// ================================================================

#[test]
fn non_integer_token_fails() {
    let output = run(&[], "3 1\n1 two 3\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not an integer"));
}

#[test]
fn oversized_element_reports_overflow() {
    let output = run(&[], "2 0\n1 99999999999999999999\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not fit in a 64-bit integer"), "{stderr}");
    assert!(!stderr.contains("not an integer"), "{stderr}");
}

#[test]
fn too_few_elements_fails() {
    let output = run(&[], "4 1\n1 2\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected 4 elements, got 2"));
}
