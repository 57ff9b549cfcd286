//! Integration tests for `guardsmith plan`

use std::process::Command;

use tempfile::tempdir;

mod common;
use common::{bin, write_auth_config, TWO_GUARD_CONFIG};

#[test]
fn plan_admin_guard_prints_conventions() {
    let dir = tempdir().unwrap();
    write_auth_config(dir.path(), TWO_GUARD_CONFIG);

    let output = Command::new(bin())
        .args(["plan", "admin", "admins", "--project"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("App\\Http\\Controllers\\Auth\\Admin"));
    assert!(stdout.contains("routes/admin-auth.php"));
    assert!(stdout.contains("/admins"));
    assert!(stdout.contains("guest:admin"));
}

#[test]
fn plan_writes_nothing() {
    let dir = tempdir().unwrap();
    write_auth_config(dir.path(), TWO_GUARD_CONFIG);

    let output = Command::new(bin())
        .args(["plan", "admin", "admins", "--project"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!dir.path().join("app").exists());
    assert!(!dir.path().join("routes").exists());
}

#[test]
fn plan_json_contains_every_field() {
    let dir = tempdir().unwrap();
    write_auth_config(dir.path(), TWO_GUARD_CONFIG);

    let output = Command::new(bin())
        .args(["--json", "plan", "web", "users", "--project"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let event: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(event["event"], "plan");
    assert_eq!(event["model"]["model_class"], "User");

    let plan = &event["plan"];
    assert_eq!(plan["controller_namespace"], "App\\Http\\Controllers\\Auth");
    assert_eq!(plan["route_prefix"], "/");
    assert_eq!(plan["route_name_prefix"], "");
    assert_eq!(plan["route_guest_guard"], "");
    assert_eq!(plan["model_table"], "users");
    assert_eq!(plan["routes_file_name"], "auth.php");
}

#[test]
fn plan_unknown_guard_fails() {
    let dir = tempdir().unwrap();
    write_auth_config(dir.path(), TWO_GUARD_CONFIG);

    let output = Command::new(bin())
        .args(["plan", "vendor", "vendors", "--project"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn plan_missing_auth_config_reports_error() {
    let dir = tempdir().unwrap();

    let output = Command::new(bin())
        .args(["plan", "--project"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid auth config"), "stderr: {stderr}");
}
