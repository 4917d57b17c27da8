use predicates::prelude::*;
use tempfile::TempDir;

use super::filegate_cmd;

fn write_control(dir: &TempDir, body: &str) -> String {
    std::fs::write(dir.path().join("config.ini"), body).unwrap();
    dir.path().to_str().unwrap().to_string()
}

#[test]
fn test_ami_prints_registry() {
    let dir = TempDir::new().unwrap();
    let ami = write_control(
        &dir,
        "# managed hosts\n<@esxi_info.host2@>=v@id456\n<@esxi_info.host1@>=val@id123;comment\n",
    );

    filegate_cmd(&dir)
        .args(["ami", &ami])
        .assert()
        .success()
        .stdout("id123 -> host1\nid456 -> host2\n");
}

#[test]
fn test_ami_empty_registry() {
    let dir = TempDir::new().unwrap();
    let ami = write_control(&dir, "nothing to see\n");

    filegate_cmd(&dir)
        .args(["ami", &ami])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No ami directives"));
}

#[test]
fn test_ami_missing_control_file() {
    let dir = TempDir::new().unwrap();

    filegate_cmd(&dir)
        .args(["ami", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.ini"));
}

#[test]
fn test_ami_json() {
    let dir = TempDir::new().unwrap();
    let ami = write_control(&dir, "<@esxi_info.host1@>=val@id123;comment\n");

    let output = filegate_cmd(&dir)
        .args(["ami", &ami, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["servers"][0]["id"], "id123");
    assert_eq!(json["servers"][0]["name"], "host1");
}
