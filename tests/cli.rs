use assert_cmd::prelude::*;
use chrono::Utc;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn future_timestamp() -> String {
    (Utc::now() + chrono::Duration::hours(2)).to_rfc3339()
}

fn write_config(dir: &Path, username: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        r#"base_url: http://localhost:9
session:
  access_token: test-access
  refresh_token: test-refresh
  expires_at: {}
  user:
    id: u-1
    username: {username}
    roles:
      - ROLE_TEACHER
"#,
        future_timestamp()
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn courseop() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("courseop"));
    cmd.env_remove("COURSEOP_CONFIG")
        .env_remove("COURSEOP_API_HOST")
        .env_remove("COURSEOP_FORMAT")
        .env_remove("COURSEOP_NO_CACHE");
    cmd
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "prof-chen");

    let assert = courseop()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("prof-chen"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("Session valid"));

    Ok(())
}

#[test]
fn status_without_config_suggests_login() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("config.yaml");

    courseop()
        .arg("status")
        .arg("--config")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration not found"));

    Ok(())
}

#[test]
fn protected_command_without_session_requires_login() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("config.yaml");

    courseop()
        .arg("order")
        .arg("list")
        .arg("--config")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sign-in required"))
        .stderr(predicate::str::contains("courseop login"));

    Ok(())
}

#[test]
fn logout_without_session_is_a_noop() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("config.yaml");

    courseop()
        .arg("logout")
        .arg("--config")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));

    Ok(())
}

#[test]
fn version_prints_package_version() -> Result<(), Box<dyn std::error::Error>> {
    courseop()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn course_list_renders_catalog_from_api() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _courses = server
        .mock("GET", "/courses")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{
                "code": 200,
                "message": "ok",
                "data": {
                    "items": [
                        {"id": "c-1", "title": "Rust 101", "status": "PUBLISHED",
                         "categoryId": 7, "tagIds": [1]}
                    ],
                    "totalCount": 1,
                    "page": 1,
                    "pageSize": 100
                }
            }"#,
        )
        .create();

    let _categories = server
        .mock("GET", "/categories")
        .with_status(200)
        .with_body(r#"{"code": 200, "message": "ok", "data": [{"id": 7, "name": "IT"}]}"#)
        .create();

    let _tags = server
        .mock("GET", "/tags")
        .with_status(200)
        .with_body(r#"{"code": 200, "message": "ok", "data": [{"id": 1, "name": "rust"}]}"#)
        .create();

    let temp = tempdir()?;
    let missing = temp.path().join("config.yaml");

    let assert = courseop()
        .arg("course")
        .arg("list")
        .arg("--no-cache")
        .arg("--config")
        .arg(&missing)
        .arg("--api-host")
        .arg(server.url())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Rust 101"));
    assert!(stdout.contains("IT"));
    assert!(stdout.contains("rust"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn business_failure_is_reported_once() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _tags = server
        .mock("GET", "/tags")
        .with_status(200)
        .with_body(r#"{"code": 5001, "message": "catalog offline", "data": null}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "prof-chen");

    let assert = courseop()
        .arg("tag")
        .arg("list")
        .arg("--no-cache")
        .arg("--config")
        .arg(&config_path)
        .arg("--api-host")
        .arg(server.url())
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert_eq!(stderr.matches("catalog offline").count(), 1);

    Ok(())
}
