//! Integration tests for session commands (logout, whoami).

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn temp_parlor_home() -> TempDir {
    TempDir::new().expect("create temp parlor home")
}

fn seed_session(home: &TempDir) {
    fs::write(
        home.path().join("session.json"),
        serde_json::json!({
            "user": {"id": "u-1", "name": "Ana", "email": "ana@example.com"},
            "token": "jwt-token"
        })
        .to_string(),
    )
    .unwrap();
}

#[test]
fn test_whoami_prints_user() {
    let home = temp_parlor_home();
    seed_session(&home);

    cargo_bin_cmd!("parlor")
        .env("PARLOR_HOME", home.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana <ana@example.com>"));
}

/// whoami never prints the token.
#[test]
fn test_whoami_hides_token() {
    let home = temp_parlor_home();
    seed_session(&home);

    cargo_bin_cmd!("parlor")
        .env("PARLOR_HOME", home.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("jwt-token").not());
}

#[test]
fn test_whoami_fails_without_session() {
    let home = temp_parlor_home();

    cargo_bin_cmd!("parlor")
        .env("PARLOR_HOME", home.path())
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_logout_removes_session() {
    let home = temp_parlor_home();
    seed_session(&home);

    cargo_bin_cmd!("parlor")
        .env("PARLOR_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));

    assert!(!home.path().join("session.json").exists());
}

/// Logout with no session succeeds (idempotent).
#[test]
fn test_logout_idempotent() {
    let home = temp_parlor_home();

    cargo_bin_cmd!("parlor")
        .env("PARLOR_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No session to clear."));
}
