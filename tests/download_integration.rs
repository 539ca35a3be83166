//! Integration tests for the download command.
//!
//! Downloads are fire-and-forget triggers, so these assert issuance (the
//! constructed URL), never delivery.

use std::process::Command;

#[test]
fn test_download_prints_deterministic_url() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "download",
            "abc123",
            "--print-url",
            "--api-url",
            "http://localhost:8000",
        ])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("http://localhost:8000/download/abc123"),
        "Expected the report URL, got: {}",
        stdout
    );
}

#[test]
fn test_download_base_url_trailing_slash() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "download",
            "abc123",
            "--print-url",
            "--api-url",
            "http://localhost:8000/",
        ])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://localhost:8000/download/abc123"));
}
