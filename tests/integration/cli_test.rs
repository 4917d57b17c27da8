use predicates::prelude::*;
use tempfile::TempDir;

use super::filegate_cmd;

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    filegate_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("file portal"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    filegate_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("filegate"));
}

#[test]
fn test_log_file_receives_login_events() {
    let dir = TempDir::new().unwrap();
    super::write_config(&dir, r#"{"auth": {"alice": "secret"}}"#);
    let log = dir.path().join("message.txt");

    filegate_cmd(&dir)
        .args(["verify", "alice", "--log-file", log.to_str().unwrap()])
        .env("RUST_LOG", "info")
        .write_stdin("secret\n")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("LOGIN"));
    assert!(contents.contains("LOGOUT"));
    assert!(!contents.contains("secret"));
}
