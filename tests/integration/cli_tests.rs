//! CLI structure and argument-handling tests.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn hostsync() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hostsync"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("HOSTSYNC_SERVER");
    cmd.env_remove("HOSTSYNC_USER");
    cmd.env_remove("HOSTSYNC_PASSWORD");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_nonzero() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    hostsync().assert().code(2).stderr(predicate::str::contains(
        "Declarative host reconciliation",
    ));
}

#[test]
fn test_cli_help_flag_shows_help() {
    hostsync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_version_command_shows_version() {
    hostsync()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "hostsync {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = hostsync()
        .args(["version", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("version --json must emit valid JSON");
    assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
}

// --- Argument validation tests ---

#[test]
fn test_apply_requires_name() {
    hostsync()
        .args([
            "apply",
            "--server",
            "https://zabbix.example.com",
            "--user",
            "api",
            "--password",
            "secret",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_apply_rejects_invalid_state_value() {
    hostsync()
        .args([
            "apply",
            "--server",
            "https://zabbix.example.com",
            "--user",
            "api",
            "--password",
            "secret",
            "--name",
            "srv1",
            "--state",
            "gone",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--state"));
}

// --- Server URL validation (fails before any network use) ---

#[test]
fn test_apply_rejects_url_without_http_scheme() {
    hostsync()
        .args([
            "apply",
            "--server",
            "zabbix.example.com",
            "--user",
            "api",
            "--password",
            "secret",
            "--name",
            "srv1",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must start with http"));
}

#[test]
fn test_plan_rejects_url_without_http_scheme_in_json_mode() {
    let output = hostsync()
        .args([
            "plan",
            "--json",
            "--server",
            "ftp://zabbix.example.com",
            "--user",
            "api",
            "--password",
            "secret",
            "--name",
            "srv1",
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("--json errors must emit valid JSON");
    assert_eq!(parsed["error"], true);
    assert_eq!(parsed["code"], "config");
}
