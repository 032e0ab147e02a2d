//! User-facing error messages.

use claude_cli_mcp_core::{Error, Platform};

/// Exit status for every fatal launcher or installer error.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Lines printed to stderr for a fatal error, hints included.
pub fn failure_lines(err: &Error, platform: Platform) -> Vec<String> {
    let mut lines = vec![format!("Error: {err}")];

    if let Error::Spawn { program, .. } = err {
        if err.is_command_not_found() {
            lines.push(format!("Command not found: {program}"));
            if platform.supports_compat_layer() {
                lines.push("Make sure WSL is installed and Python is available in WSL".to_string());
            }
        }
    }

    lines
}

/// Print `err` to stderr and return the exit status to use.
pub fn report_failure(err: &Error, platform: Platform) -> i32 {
    tracing::debug!("Fatal error: {:?}", err);
    for line in failure_lines(err, platform) {
        eprintln!("{line}");
    }
    FAILURE_EXIT_CODE
}
