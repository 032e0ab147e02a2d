//! Integration tests for the launcher binaries.
//!
//! The test binaries live in `target/<profile>/`, so the package root they
//! resolve is `target/`, which has neither the server script nor a
//! `requirements.txt`.

use std::process::{Command, Stdio};

#[test]
fn test_launcher_fails_cleanly_without_script() {
    let output = Command::new(env!("CARGO_BIN_EXE_claude-cli-mcp"))
        .stdin(Stdio::null())
        .env_remove("DEBUG")
        .output()
        .expect("failed to run launcher");

    assert_eq!(output.status.code(), Some(1));
    // Nothing may reach stdout: it carries the MCP stream.
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Script not found") || stderr.contains("Python not found"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_launcher_debug_logs_to_stderr_only() {
    let output = Command::new(env!("CARGO_BIN_EXE_claude-cli-mcp"))
        .stdin(Stdio::null())
        .env("DEBUG", "1")
        .output()
        .expect("failed to run launcher");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Install dir:"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("Platform:"), "unexpected stderr: {stderr}");
}

#[test]
fn test_postinstall_without_manifest_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_claude-cli-mcp-postinstall"))
        .stdin(Stdio::null())
        .output()
        .expect("failed to run postinstall");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("requirements.txt not found"), "unexpected stderr: {stderr}");
}
