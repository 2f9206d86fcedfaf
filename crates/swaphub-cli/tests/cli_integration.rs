//! Integration tests for swaphub-cli
//!
//! These run the binary without a backend: help/version surfaces, argument
//! validation, and the session-free paths. Tests touching the session file
//! run serially and point SWAPHUB_SESSION_PATH at a temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Get a Command for the swaphub binary
fn swaphub() -> Command {
    Command::cargo_bin("swaphub").unwrap()
}

/// Serve exactly one canned JSON response on a random local port.
fn serve_once(body: &'static str) -> (String, std::thread::JoinHandle<()>) {
    use std::io::{Read, Write};
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            request.extend_from_slice(&chunk[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    (format!("http://{}/api", addr), handle)
}

// =============================================================================
// Help and version
// =============================================================================

#[test]
fn test_cli_help() {
    swaphub()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("swaphub"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("swap"));
}

#[test]
fn test_cli_version() {
    swaphub()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("swaphub"));
}

#[test]
fn test_subcommand_help() {
    for family in ["auth", "browse", "listing", "swap", "dashboard", "admin", "config"] {
        swaphub()
            .args([family, "--help"])
            .assert()
            .success();
    }
}

// =============================================================================
// Argument validation (no network involved)
// =============================================================================

#[test]
fn test_unknown_subcommand_fails() {
    swaphub()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn test_invalid_format_rejected() {
    swaphub()
        .args(["--format", "yaml", "auth", "whoami"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_listing_add_requires_image() {
    swaphub()
        .args([
            "listing", "add",
            "--title", "Denim jacket",
            "--description", "Lightly worn",
            "--points", "25",
            "--category", "tops",
            "--size", "m",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--image"));
}

// =============================================================================
// Session-free paths
// =============================================================================

#[test]
#[serial]
fn test_whoami_without_session() {
    let dir = TempDir::new().unwrap();
    swaphub()
        .env("SWAPHUB_SESSION_PATH", dir.path().join("session.json"))
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
#[serial]
fn test_logout_without_session_is_ok() {
    let dir = TempDir::new().unwrap();
    swaphub()
        .env("SWAPHUB_SESSION_PATH", dir.path().join("session.json"))
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));
}

#[test]
#[serial]
fn test_config_show_reports_api_base() {
    let dir = TempDir::new().unwrap();
    swaphub()
        .env("SWAPHUB_SESSION_PATH", dir.path().join("session.json"))
        .env("SWAPHUB_API_BASE_URL", "http://example.test/api")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://example.test/api"))
        .stdout(predicate::str::contains("http://example.test"));
}

#[test]
#[serial]
fn test_browse_categories_honors_json_format() {
    let dir = TempDir::new().unwrap();
    let (base, handle) = serve_once(
        r#"{"categories": [{"value": "tops", "label": "Tops"}], "conditions": [{"value": "good", "label": "Good"}]}"#,
    );
    swaphub()
        .env("SWAPHUB_SESSION_PATH", dir.path().join("session.json"))
        .env("SWAPHUB_API_BASE_URL", &base)
        .args(["--format", "json", "browse", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tops\""))
        .stdout(predicate::str::contains("\"condition\""));
    handle.join().unwrap();
}

#[test]
#[serial]
fn test_config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    swaphub()
        .env("SWAPHUB_SESSION_PATH", dir.path().join("session.json"))
        .args(["config", "get", "nonsense"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown config key"));
}
