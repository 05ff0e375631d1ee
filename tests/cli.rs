//
//  kongo
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end checks of the `kongo` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `kongo` command with its config directory isolated under `home`.
fn kongo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kongo").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("KONGO_URL")
        .env_remove("KONGO_TIMEOUT")
        .env_remove("KONGO_LOG");
    cmd
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    kongo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin API"))
        .stdout(predicate::str::contains("service"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    kongo(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "kongo version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_config_round_trip() {
    let home = TempDir::new().unwrap();

    kongo(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    kongo(&home)
        .args(["config", "set", "timeout_secs", "5"])
        .assert()
        .success();

    kongo(&home)
        .args(["config", "get", "timeout_secs"])
        .assert()
        .success()
        .stdout("5\n");

    kongo(&home)
        .args(["config", "get", "admin_url", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:8001"));
}

#[test]
fn test_config_rejects_unknown_keys() {
    let home = TempDir::new().unwrap();
    kongo(&home)
        .args(["config", "set", "editor", "vim"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_completion_bash() {
    let home = TempDir::new().unwrap();
    kongo(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kongo"));
}

#[test]
fn test_unreachable_admin_api() {
    let home = TempDir::new().unwrap();
    kongo(&home)
        .args(["--url", "http://127.0.0.1:1", "node", "status"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_not_found_exit_code() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/services/missing")
        .with_status(404)
        .with_body(r#"{"message":"Not found"}"#)
        .create();

    kongo(&home)
        .args(["service", "get", "missing", "--url", &server.url()])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("404 Not found"));
}

#[test]
fn test_node_status_json() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/status")
        .with_status(200)
        .with_body(r#"{"database":{"reachable":true},"server":{"total_requests":3}}"#)
        .create();

    kongo(&home)
        .env("KONGO_URL", server.url())
        .args(["node", "status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""reachable": true"#));
}

#[test]
fn test_raw_api_request() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/services")
        .match_body(mockito::Matcher::Json(serde_json::json!({"name": "foo"})))
        .with_status(201)
        .with_body(r#"{"id":"s1","name":"foo"}"#)
        .create();

    kongo(&home)
        .args(["--url", &server.url(), "api", "-X", "POST", "/services"])
        .args(["-d", r#"{"name":"foo"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "s1""#));

    mock.assert();
}

#[test]
fn test_raw_api_method_is_upper_cased() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/services/foo")
        .with_status(204)
        .create();

    kongo(&home)
        .args(["--url", &server.url(), "api", "-X", "delete", "/services/foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("204"));

    mock.assert();
}
