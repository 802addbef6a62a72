//! Smoke tests to verify command wiring without a database

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn postdeck(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("postdeck").unwrap();
    cmd.env("HOME", home.path())
        .env("POSTDECK_CLIENT_CONFIG", home.path().join("client.toml"))
        .env_remove("DATABASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_top_level_help() {
    let home = TempDir::new().unwrap();
    postdeck(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("posts"))
        .stdout(predicate::str::contains("pipeline"))
        .stdout(predicate::str::contains("settings"));
}

#[test]
fn test_posts_edit_help() {
    let home = TempDir::new().unwrap();
    postdeck(&home)
        .args(["posts", "edit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hashtags, whitespace separated"));
}

#[test]
fn test_serve_help() {
    let home = TempDir::new().unwrap();
    postdeck(&home)
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in-memory store"));
}

// === Theme Tests ===

#[test]
fn test_theme_defaults_to_light() {
    let home = TempDir::new().unwrap();
    postdeck(&home)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout("light\n");
}

#[test]
fn test_theme_toggle_persists() {
    let home = TempDir::new().unwrap();
    postdeck(&home)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout("dark\n");

    postdeck(&home)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn test_theme_rejects_unknown_value() {
    let home = TempDir::new().unwrap();
    postdeck(&home)
        .args(["theme", "set", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// === Database Command Tests ===

#[test]
fn test_posts_show_rejects_bad_uuid() {
    let home = TempDir::new().unwrap();
    postdeck(&home)
        .args(["posts", "show", "not-a-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_dashboard_requires_database_url() {
    let home = TempDir::new().unwrap();
    postdeck(&home)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}
