use predicates::prelude::*;
use tempfile::TempDir;

use super::{filegate_cmd, write_config};

#[test]
fn test_check_summarizes_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"{"auth": {"alice": "secret", "bob": "pw"}, "downloadServer": ["/srv/share"], "uploadPath": "/srv/in"}"#,
    );

    filegate_cmd(&dir)
        .args(["check", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Users: alice, bob"))
        .stdout(predicate::str::contains("/srv/share"))
        .stdout(predicate::str::contains("Upload path: /srv/in/"))
        .stdout(predicate::str::contains("Ami: (not configured)"))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn test_check_uses_default_path() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, r#"{"auth": {"alice": "secret"}}"#);

    filegate_cmd(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Upload path: (disabled)"));
}

#[test]
fn test_check_reads_env_path() {
    let dir = TempDir::new().unwrap();
    let other = dir.path().join("other.json");
    std::fs::write(&other, r#"{"auth": {"carol": "x"}}"#).unwrap();

    filegate_cmd(&dir)
        .arg("check")
        .env("FILEGATE_CONFIG", &other)
        .assert()
        .success()
        .stdout(predicate::str::contains("Users: carol"));
}

#[test]
fn test_check_json() {
    let dir = TempDir::new().unwrap();
    let ami = dir.path().join("ami");
    std::fs::create_dir_all(&ami).unwrap();
    std::fs::write(ami.join("config.ini"), "<@esxi_info.host1@>=val@id123;c\n").unwrap();
    let body = serde_json::json!({
        "auth": {"alice": "secret"},
        "amipath": ami.to_str().unwrap(),
    });
    let config = write_config(&dir, &body.to_string());

    let output = filegate_cmd(&dir)
        .args(["check", "--config", &config, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["users"], serde_json::json!(["alice"]));
    assert_eq!(json["download_roots"], serde_json::json!([]));
    assert!(json.get("upload_path").is_none());
    assert_eq!(json["ami"]["entries"], 1);
    assert!(json["ami"]["command"].as_str().unwrap().ends_with("excli.sh"));
}
