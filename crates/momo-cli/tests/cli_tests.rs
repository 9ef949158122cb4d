//! End-to-end tests for the `momo` and `create-momo` binaries.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `momo` running in `dir` with colours off and an isolated config file.
fn momo(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("momo").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("npm_config_user_agent")
        .env_remove("MOMO_SCOPE")
        .env_remove("MOMO_MANAGER")
        .arg("--config")
        .arg(dir.join("settings.json"));
    cmd
}

/// `momo` inside a project, reading the project's own momo.config.json.
fn momo_in(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("momo").unwrap();
    cmd.current_dir(root).env("NO_COLOR", "1");
    cmd
}

fn create_project(tmp: &TempDir) -> std::path::PathBuf {
    momo(tmp.path())
        .args(["create", "acme", "--scope", "@acme", "--manager", "npm"])
        .assert()
        .success();
    tmp.path().join("acme")
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("momo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("doctor"))
        .stdout(predicate::str::contains("dep"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("unlink"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("momo")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn create_momo_help() {
    Command::cargo_bin("create-momo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--scope"))
        .stdout(predicate::str::contains("--manager"));
}

#[test]
fn list_shows_flavors() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available component flavors:"))
        .stdout(predicate::str::contains("nextjs"))
        .stdout(predicate::str::contains("react"));
}

#[test]
fn list_json_is_parseable() {
    let tmp = TempDir::new().unwrap();
    let out = momo(tmp.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(4));
}

#[test]
fn doctor_reports_missing_files_and_exits_zero() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("package.json missing"))
        .stdout(predicate::str::contains("Some critical issues were found"));
}

#[test]
fn config_set_then_get() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["config", "set", "author", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set author to Ada"));

    let saved = fs::read_to_string(tmp.path().join("settings.json")).unwrap();
    assert!(saved.contains("\"author\": \"Ada\""));

    momo(tmp.path())
        .args(["config", "get", "author"])
        .assert()
        .success()
        .stdout("Ada\n");
}

#[test]
fn config_path_prints_explicit_file() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings.json"));
}

#[test]
fn create_writes_skeleton() {
    let tmp = TempDir::new().unwrap();
    let root = create_project(&tmp);

    for file in ["package.json", "turbo.json", "momo.config.json", ".gitignore"] {
        assert!(root.join(file).is_file(), "{file} missing");
    }
    assert!(root.join("apps").is_dir());
    assert!(root.join("packages").is_dir());
    assert!(!root.join("pnpm-workspace.yaml").exists());

    let manifest = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(manifest.contains("\"packageManager\": \"npm@"));
}

#[test]
fn create_dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    momo(tmp.path())
        .args(["create", "acme", "--scope", "@acme", "--manager", "pnpm", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm-workspace.yaml"));
    assert!(!tmp.path().join("acme").exists());
}

#[test]
fn add_package_inside_project() {
    let tmp = TempDir::new().unwrap();
    let root = create_project(&tmp);

    momo(&root)
        .args(["add", "package", "ui", "--flavor", "react"])
        .assert()
        .success();

    assert!(root.join("packages/ui/package.json").is_file());
    assert!(root.join("packages/ui/tsconfig.json").is_file());
}

#[test]
fn doctor_in_fresh_npm_project_is_healthy() {
    let tmp = TempDir::new().unwrap();
    let root = create_project(&tmp);

    momo_in(&root)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project is healthy!"));
}
