//! End-to-end tests driving the `yap` binary against a temporary state file.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run `yap --file <path> <command>` and return (stdout, stderr, exit code).
fn yap(path: &Path, command: &str) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_yap"))
        .arg("--file")
        .arg(path)
        .arg(command)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run yap");

    let stdout = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
    (stdout, stderr, output.status.code().unwrap_or(-1))
}

#[test]
fn state_on_fresh_file_waits_and_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("yap-test-file");

    let (stdout, _, code) = yap(&path, "state");

    assert_eq!(code, 0);
    assert_eq!(stdout, "WAITING_FOR_POMODORO P1");
    assert!(!path.exists());
}

#[test]
fn start_creates_file_and_runs_pomodoro() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("yap-test-file");

    let (_, _, code) = yap(&path, "start");
    assert_eq!(code, 0);
    assert!(path.exists());

    let (stdout, _, code) = yap(&path, "state");
    assert_eq!(code, 0);
    assert!(stdout.starts_with("POMODORO "), "got {stdout:?}");
}

#[test]
fn stop_returns_to_waiting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("yap-test-file");

    yap(&path, "start");
    yap(&path, "stop");
    let (stdout, _, code) = yap(&path, "state");

    assert_eq!(code, 0);
    assert_eq!(stdout, "WAITING_FOR_POMODORO P1");
}

#[test]
fn refusals_exit_successfully() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("yap-test-file");

    yap(&path, "start");

    let (stdout, _, code) = yap(&path, "start");
    assert_eq!(code, 0);
    assert_eq!(stdout, "already started");

    let (stdout, _, code) = yap(&path, "next");
    assert_eq!(code, 0);
    assert_eq!(stdout, "you cant just skip during a pomodoro");
}

#[test]
fn outside_pomodoro_exit_status() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("yap-test-file");

    let (_, _, code) = yap(&path, "outside-pomodoro");
    assert_eq!(code, 0, "no file means not in a pomodoro");

    yap(&path, "start");
    let (_, stderr, code) = yap(&path, "outside-pomodoro");
    assert_eq!(code, 1);
    assert_eq!(stderr, "in pomodoro");

    yap(&path, "stop");
    let (_, _, code) = yap(&path, "outside-pomodoro");
    assert_eq!(code, 0);
}

#[test]
fn malformed_state_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("yap-test-file");
    std::fs::write(&path, "not json").unwrap();

    let (_, stderr, code) = yap(&path, "state");

    assert_eq!(code, 3);
    assert!(stderr.starts_with("error: malformed state file"), "got {stderr:?}");
}

#[test]
fn unknown_command_exits_with_usage_status() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("yap-test-file");

    let (_, _, code) = yap(&path, "pause");

    assert_eq!(code, 2);
    assert!(!path.exists());
}
