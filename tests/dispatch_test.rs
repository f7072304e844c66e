//! Integration tests for subcommand dispatch
//!
//! - Unknown and missing subcommands print help and exit 0
//! - version, sleep and docker-acceptance-test
//! - Bad option values exit 1
//! - Termination signals end the process cleanly

mod common;

use std::time::{Duration, Instant};

use common::TestProject;

#[test]
fn test_unknown_subcommand_prints_help_and_exits_zero() {
    let project = TestProject::new();

    let output = project.run(&["frobnicate"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Usage"), "stdout: {stdout}");
    assert!(stdout.contains("create-save-images"));
    assert!(stderr.contains("senzing-50280696W Bad SENZING_SUBCOMMAND: frobnicate."));
}

#[test]
fn test_unknown_environment_subcommand_prints_help_and_exits_zero() {
    let project = TestProject::new();

    let output = project.run_with_env(&[], &[("SENZING_SUBCOMMAND", "frobnicate")]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("frobnicate"));
}

#[test]
fn test_no_arguments_prints_help_and_exits_zero() {
    let project = TestProject::new();

    let output = project.run(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_docker_launched_without_arguments_sleeps() {
    let project = TestProject::new();

    let output = project.run_with_env(
        &[],
        &[
            ("SENZING_DOCKER_LAUNCHED", "true"),
            ("SENZING_SLEEP_TIME_IN_SECONDS", "1"),
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Sleeping 1 seconds."));
}

#[test]
fn test_version_logs_version_and_update_date() {
    let project = TestProject::new();

    let output = project.run(&["version"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let expected = format!("Version: {}  Updated: 2022-09-29", env!("CARGO_PKG_VERSION"));
    assert!(stderr.contains(&expected), "stderr: {stderr}");
    assert!(stderr.contains("senzing-50280294I"));
}

#[test]
fn test_docker_acceptance_test_logs_entry_and_exit() {
    let project = TestProject::new();

    let output = project.run(&["docker-acceptance-test"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("senzing-50280297I"));
    assert!(stderr.contains("senzing-50280298I"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_sleep_from_environment_returns() {
    let project = TestProject::new();
    let start = Instant::now();

    let output = project.run_with_env(&["sleep"], &[("SENZING_SLEEP_TIME_IN_SECONDS", "1")]);

    assert!(output.status.success());
    assert!(start.elapsed() >= Duration::from_secs(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sleeping 1 seconds."));
    assert!(!stderr.contains("Sleeping infinitely."));
}

#[test]
fn test_sleep_flag_beats_environment() {
    let project = TestProject::new();

    let output = project.run_with_env(
        &["sleep", "--sleep-time-in-seconds", "1"],
        &[("SENZING_SLEEP_TIME_IN_SECONDS", "999")],
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Sleeping 1 seconds."));
}

#[test]
fn test_malformed_sleep_time_exits_one() {
    let project = TestProject::new();

    let output = project.run(&["sleep", "--sleep-time-in-seconds", "soon"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("senzing-50280501E"), "stderr: {stderr}");
    assert!(stderr.contains("senzing-50280698E Program terminated with error."));
}

#[test]
fn test_log_level_hides_info_messages() {
    let project = TestProject::new();

    let output = project.run_with_env(&["version"], &[("SENZING_LOG_LEVEL", "error")]);

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Version:"));
}

#[cfg(unix)]
#[test]
fn test_sigterm_ends_infinite_sleep_with_exit_message() {
    let project = TestProject::new();
    let child = project
        .command(&["sleep"])
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .expect("Failed to spawn sleep");

    std::thread::sleep(Duration::from_secs(1));
    let status = std::process::Command::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(status.success());

    let output = child.wait_with_output().expect("Failed to wait for sleep");
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sleeping infinitely."), "stderr: {stderr}");
    assert!(stderr.contains("senzing-50280298I Exit"), "stderr: {stderr}");
}
