//! Tests for exit codes and error messages.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn momo(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("momo").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(dir.join("settings.json"));
    cmd
}

#[test]
fn dep_outside_project_is_a_user_error() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["dep", "zod"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not inside a momo project"))
        .stderr(predicate::str::contains("momo create"));
}

#[test]
fn failure_is_reported_once() {
    let tmp = TempDir::new().unwrap();
    let out = momo(tmp.path()).args(["dep", "zod"]).output().unwrap();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("Not inside a momo project").count(), 1);
    assert!(!stderr.contains("WARN"));
}

#[test]
fn bare_add_outside_project_is_a_user_error() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .arg("add")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not inside a momo project"));
}

#[test]
fn bare_add_without_terminal_asks_for_flags() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["create", "acme", "--scope", "@acme", "--manager", "npm"])
        .assert()
        .success();

    momo(&tmp.path().join("acme"))
        .arg("add")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("What do you want to add?"));
}

#[test]
fn dep_with_unknown_app_is_not_found() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["create", "acme", "--scope", "@acme", "--manager", "npm"])
        .assert()
        .success();

    momo(&tmp.path().join("acme"))
        .args(["add", "dep", "zod", "--app", "missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("app 'missing' not found"));
}

#[test]
fn invalid_project_name_is_rejected() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["create", "Bad Name", "--scope", "@acme", "--manager", "npm"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
    assert!(!tmp.path().join("Bad Name").exists());
}

#[test]
fn create_inside_project_is_refused() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["create", "acme", "--scope", "@acme", "--manager", "npm"])
        .assert()
        .success();

    momo(&tmp.path().join("acme"))
        .args(["create", "nested", "--scope", "@acme", "--manager", "npm"])
        .assert()
        .code(2);
}

#[test]
fn unknown_config_key_is_not_found() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["config", "get", "colour"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Key \"colour\" not found"));
}

#[test]
fn invalid_manager_value_is_a_config_error() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["config", "set", "manager", "bower"])
        .assert()
        .code(4);
}

#[test]
fn clap_rejects_unknown_flavor() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["add", "app", "web", "--flavor", "svelte"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("svelte"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    Command::cargo_bin("momo")
        .unwrap()
        .args(["-q", "-v", "list"])
        .assert()
        .code(2);
}
