//! Integration tests for the `nagrange` check, driven through `run`.
//!
//! The configuration file is chosen through an environment variable, so tests
//! that set it run under a lock and restore it afterwards.

use nagrange_lib::{CONFIG_ENV, Host};
use std::io::{Cursor, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Test host that captures output and the exit code.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        Cursor::new(&mut self.output_buf)
    }

    fn error(&mut self) -> impl Write {
        Cursor::new(&mut self.error_buf)
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run the check with the given config file contents (or none) and return the host afterwards.
fn check_host(config: Option<&str>, args: &[&str]) -> TestHost {
    let _guard = lock_env();
    let dir = tempfile::tempdir().unwrap();

    if let Some(text) = config {
        let path = dir.path().join("nagrange.toml");
        std::fs::write(&path, text).unwrap();

        // SAFETY: every test that touches the variable holds ENV_LOCK.
        unsafe { std::env::set_var(CONFIG_ENV, &path) };
    }

    let mut host = TestHost::new();
    let result = nagrange_lib::run(&mut host, std::iter::once("nagrange").chain(args.iter().copied()));

    // SAFETY: as above.
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert!(result.is_ok(), "run should not fail: {result:?}");
    host
}

/// Run the check and return the output and exit code.
fn check(config: Option<&str>, args: &[&str]) -> (String, i32) {
    let host = check_host(config, args);
    let code = host.exit_code.expect("run should always exit");
    (host.output_str(), code)
}

#[test]
fn test_ok_without_measurements() {
    let (output, code) = check(None, &["-w", "10", "-c", "20"]);
    assert_eq!(output, "Status Ok\n");
    assert_eq!(code, 0);
}

#[test]
fn test_warning_and_critical() {
    let (output, code) = check(None, &["-w", "80", "-c", "90", "disk=85%"]);
    assert_eq!(output, "Status Warning|disk=85%;80;;;\n");
    assert_eq!(code, 1);

    let (output, code) = check(None, &["-w", "80", "-c", "90", "-m", "root fs", "disk=95%"]);
    insta::assert_snapshot!(output.trim_end(), @"Status Critical, root fs|disk=95%;80;90;;");
    assert_eq!(code, 2);
}

#[test]
fn test_multiple_metrics_use_their_slots() {
    let (output, code) = check(
        Some("[[metrics]]\nname = \"rx\"\nscale = \"KB\"\nslot = 2\n"),
        &["-w", "10,100", "-c", "20,200", "load=5", "rx=150"],
    );
    insta::assert_snapshot!(output.trim_end(), @"Status Warning|load=5;;;; rx=150KB;100;;;");
    assert_eq!(code, 1);
}

#[test]
fn test_inverted_and_negative_ranges() {
    let (output, code) = check(None, &["-w", "@-10:10", "temp=-3"]);
    assert_eq!(output, "Status Warning|temp=-3;@-10:10;;;\n");
    assert_eq!(code, 1);
}

#[test]
fn test_zero_floor_is_default() {
    let (_, code) = check(None, &["-w", "10", "temp=-1"]);
    assert_eq!(code, 1);
}

#[test]
fn test_simple_range_mode_from_config() {
    let (output, code) = check(Some("range_mode = \"simple-range\"\n"), &["-w", "10", "temp=-1"]);
    assert_eq!(output, "Status Ok|temp=-1;;;;\n");
    assert_eq!(code, 0);
}

#[test]
fn test_malformed_range_is_unknown() {
    let (output, code) = check(None, &["-w", "10:abc", "load=1"]);
    assert!(output.starts_with("Status Unknown, invalid range '10:abc'"), "{output}");
    assert_eq!(code, 3);
}

#[test]
fn test_missing_required_threshold_is_unknown() {
    let (output, code) = check(Some("critical_required = true\n"), &["-w", "10", "load=1"]);
    assert_eq!(output, "Status Unknown, slot 1 of critical threshold not set\n");
    assert_eq!(code, 3);
}

#[test]
fn test_non_numeric_value_is_unknown() {
    let (output, code) = check(None, &["load=high"]);
    assert_eq!(output, "Status Unknown, performance measure 'load' must be numeric, got 'high'\n");
    assert_eq!(code, 3);
}

#[test]
fn test_unknown_scale_is_unknown() {
    let (output, code) = check(None, &["dist=3furlongs"]);
    assert!(output.starts_with("Status Unknown, invalid scale 'furlongs'"), "{output}");
    assert_eq!(code, 3);
}

#[test]
fn test_unknown_flag_is_unknown() {
    let (output, code) = check(None, &["--bogus"]);
    assert!(output.starts_with("Status Unknown, error:"), "{output}");
    assert_eq!(output.lines().count(), 1);
    assert_eq!(code, 3);
}

#[test]
fn test_bad_config_is_unknown() {
    let (output, code) = check(Some("range_mode = 5\n"), &["load=1"]);
    assert!(output.starts_with("Status Unknown, "), "{output}");
    assert_eq!(output.lines().count(), 1);
    assert_eq!(code, 3);
}

#[test]
fn test_message_pipe_is_sanitized() {
    let (output, _) = check(None, &["-m", "a|b", "load=1"]);
    assert_eq!(output, "Status Ok, a b|load=1;;;;\n");
}

#[test]
fn test_help_and_version_exit_zero() {
    let (output, code) = check(None, &["--help"]);
    assert!(output.contains("--warning"), "{output}");
    assert!(output.contains("MEASUREMENT"), "{output}");
    assert_eq!(code, 0);

    let (output, code) = check(None, &["--version"]);
    assert!(output.starts_with("nagrange "), "{output}");
    assert_eq!(code, 0);
}

#[test]
fn test_failure_details_go_to_error_stream() {
    let host = check_host(None, &["--bogus"]);
    let details = String::from_utf8_lossy(&host.error_buf).into_owned();
    assert!(details.contains("unexpected argument '--bogus'"), "{details}");
    assert!(details.contains("Usage:"), "{details}");
    assert_eq!(host.output_str().lines().count(), 1);
    assert_eq!(host.exit_code, Some(3));
}

#[test]
fn test_successful_check_leaves_error_stream_empty() {
    let host = check_host(None, &["-w", "10", "load=1"]);
    assert!(host.error_buf.is_empty());
    assert_eq!(host.exit_code, Some(0));
}
