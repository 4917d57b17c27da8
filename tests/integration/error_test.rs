use predicates::prelude::*;
use tempfile::TempDir;

use super::{filegate_cmd, write_config};

#[test]
fn test_exit_code_missing_config() {
    let dir = TempDir::new().unwrap();
    let output = filegate_cmd(&dir).arg("check").output().unwrap();
    assert_eq!(output.status.code(), Some(7)); // ConfigRead
}

#[test]
fn test_exit_code_missing_auth() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, r#"{"downloadServer": []}"#);

    filegate_cmd(&dir)
        .arg("check")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("auth"));
}

#[test]
fn test_exit_code_malformed_json() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "{ not json");

    filegate_cmd(&dir)
        .arg("check")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_json_error_output() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, r#"{"auth": {"alice": 1}}"#);

    let output = filegate_cmd(&dir)
        .args(["check", "--json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let line = stderr.lines().last().unwrap();
    let json: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(json["error"]["code"], "invalid_config");
    assert_eq!(json["error"]["exit_code"], 7);
}
