//! End-to-end check that a termination request sent to the launcher reaches
//! the child.
//!
//! Separate from the interrupt test: both signal the test process itself.

#![cfg(unix)]

use std::io::Write;
use std::time::Duration;

use claude_cli_mcp_core::{EnvSnapshot, InvocationPrefix};
use claude_cli_mcp_runtime::Launcher;
use nix::sys::signal::{kill, Signal};
use nix::unistd::getpid;

#[tokio::test]
async fn test_terminate_is_forwarded_and_exit_code_mirrored() {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    script
        .write_all(b"trap 'exit 43' TERM\nwhile :; do sleep 0.1; done\n")
        .unwrap();
    let script_path = script.path().to_path_buf();

    let launcher = Launcher::new(InvocationPrefix::native("sh"), EnvSnapshot::capture());
    let run = tokio::spawn(async move { launcher.run(&script_path).await });

    // The relay replaces the default SIGTERM action before spawn, so the test
    // process survives; give the child time to set its trap.
    tokio::time::sleep(Duration::from_millis(500)).await;
    kill(getpid(), Signal::SIGTERM).unwrap();

    let code = tokio::time::timeout(Duration::from_secs(10), run)
        .await
        .expect("launcher did not finish after termination request")
        .expect("launcher task panicked")
        .expect("launcher returned an error");

    assert_eq!(code, 43);
}
