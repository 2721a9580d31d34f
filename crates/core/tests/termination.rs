//! Integration tests for forced unwraps.
//!
//! These tests verify that:
//! - `unwrap` / `expect` on an Error abort the process
//! - The report names the caller's file and line
//! - `expect` replaces the error's own message
//! - The report is written once, even with a subscriber installed
//!
//! Aborting cannot be observed in-process, so every scenario re-runs this
//! test binary filtered to a single ignored `child_*` test, with `CHILD_ENV`
//! set. The `child_*` tests also return immediately without the variable,
//! so `cargo test -- --ignored` stays harmless.

#![forbid(clippy::unwrap_used)]
#![forbid(clippy::expect_used)]
#![allow(clippy::arithmetic_side_effects)]

use std::env;
use std::process::{Command, Output};

use railcall_core::{self as rc, Error, ResultView};

const CHILD_ENV: &str = "RAILCALL_TERMINATION_CHILD";
const BROKEN: Error = Error::new("Broken", "Something broke");

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

fn run_child(scenario: &str) -> std::io::Result<Output> {
    Command::new(env::current_exe()?)
        .args([
            "--exact",
            scenario,
            "--ignored",
            "--nocapture",
            "--test-threads",
            "1",
        ])
        .env(CHILD_ENV, "1")
        .output()
}

fn is_child() -> bool {
    env::var_os(CHILD_ENV).is_some()
}

// ==========================================================================
// CHILD SCENARIOS
// ==========================================================================

#[test]
#[ignore = "run as a child process by the tests below"]
fn child_unwrap_error() {
    if !is_child() {
        return;
    }
    let result: rc::Result<i32> = rc::Result::error(BROKEN);
    let _ = result.unwrap();
}

#[test]
#[ignore = "run as a child process by the tests below"]
fn child_expect_error() {
    if !is_child() {
        return;
    }
    let result: rc::Result<i32> = rc::Result::error(BROKEN);
    let _ = result.expect(format_args!("adder failed for y={}", 8));
}

#[test]
#[ignore = "run as a child process by the tests below"]
fn child_view_unwrap_error() {
    if !is_child() {
        return;
    }
    let view: ResultView<'_, str> = ResultView::error(BROKEN);
    let _ = view.unwrap();
}

#[test]
#[ignore = "run as a child process by the tests below"]
fn child_terminate_macro() {
    if !is_child() {
        return;
    }
    rc::terminate!("custom stop {}", 7);
}

#[test]
#[ignore = "run as a child process by the tests below"]
fn child_unwrap_ok() {
    if !is_child() {
        return;
    }
    let value = rc::Result::ok(41).unwrap();
    println!("value={}", value + 1);
}

#[test]
#[ignore = "run as a child process by the tests below"]
fn child_unwrap_error_with_subscriber() {
    if !is_child() {
        return;
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .init();
    let result: rc::Result<i32> = rc::Result::error(BROKEN);
    let _ = result.unwrap();
}

// ==========================================================================
// PARENT ASSERTIONS
// ==========================================================================

/// # GIVEN
/// A Result holding an Error
///
/// # WHEN
/// The caller unwraps it
///
/// # THEN
/// The process aborts, reporting the error message and the call site
#[test]
fn test_unwrap_on_error_aborts_with_location() -> TestResult {
    let output = run_child("child_unwrap_error")?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "child should abort");
    assert!(stderr.contains("Error: Something broke."), "{stderr}");
    assert!(stderr.contains("termination.rs:"), "{stderr}");
    Ok(())
}

#[test]
fn test_expect_overrides_message() -> TestResult {
    let output = run_child("child_expect_error")?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "child should abort");
    assert!(stderr.contains("adder failed for y=8"), "{stderr}");
    assert!(!stderr.contains("Something broke"), "{stderr}");
    assert!(stderr.contains("termination.rs:"), "{stderr}");
    Ok(())
}

#[test]
fn test_view_unwrap_on_error_aborts() -> TestResult {
    let output = run_child("child_view_unwrap_error")?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "child should abort");
    assert!(stderr.contains("Error: Something broke."), "{stderr}");
    Ok(())
}

#[test]
fn test_terminate_macro_reports_location() -> TestResult {
    let output = run_child("child_terminate_macro")?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "child should abort");
    assert!(stderr.contains("custom stop 7"), "{stderr}");
    assert!(stderr.contains("termination.rs:"), "{stderr}");
    Ok(())
}

#[test]
fn test_unwrap_on_ok_does_not_terminate() -> TestResult {
    let output = run_child("child_unwrap_ok")?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("value=42"), "{stdout}");
    Ok(())
}

/// # GIVEN
/// A stderr fmt subscriber at debug level, as the adder binary installs
///
/// # WHEN
/// A Result holding an Error is unwrapped
///
/// # THEN
/// The error message reaches stderr exactly once
#[test]
fn test_report_is_not_duplicated_by_subscriber() -> TestResult {
    let output = run_child("child_unwrap_error_with_subscriber")?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "child should abort");
    assert_eq!(stderr.matches("Something broke").count(), 1, "{stderr}");
    assert!(stderr.contains("terminating"), "{stderr}");
    Ok(())
}
