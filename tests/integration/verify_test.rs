use predicates::prelude::*;
use tempfile::TempDir;

use super::{filegate_cmd, write_config};

#[test]
fn test_verify_good_credentials() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"auth": {"alice": "secret"}}"#);

    filegate_cmd(&dir)
        .args(["verify", "alice", "--config", &config, "--addr", "192.168.0.9:4242"])
        .write_stdin("secret\n")
        .assert()
        .success()
        .stdout("alice@192.168.0.9\n");
}

#[test]
fn test_verify_bad_password() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"auth": {"alice": "secret"}}"#);

    filegate_cmd(&dir)
        .args(["verify", "alice", "--config", &config])
        .write_stdin("nope")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid credentials"));
}

#[test]
fn test_verify_json() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"auth": {"alice": "secret"}}"#);

    let output = filegate_cmd(&dir)
        .args(["verify", "alice", "--config", &config, "--json"])
        .write_stdin("secret")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["username"], "alice");
    assert_eq!(json["ip"], "127.0.0.1");
    assert_eq!(json["logged_out"], true);
}
