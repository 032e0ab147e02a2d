//! # Claude CLI MCP launcher
//!
//! Starts the Claude CLI MCP server (a Python script shipped next to this
//! binary) over stdio.
//!
//! ## Overview
//!
//! - Finds Python: `wsl -e python3`/`python` on Windows when WSL is usable,
//!   otherwise `python3`/`python` on `PATH`
//! - Translates the script path into WSL's `/mnt/<drive>` form when needed
//! - Runs the script with inherited stdio and `PYTHONUNBUFFERED=1`
//! - Forwards SIGINT/SIGTERM and exits with the server's exit code
//!
//! Set `DEBUG` to any non-empty value for diagnostics on stderr.

use anyhow::Context;
use claude_cli_mcp::logging;
use claude_cli_mcp_core::config::DEBUG_VAR;
use claude_cli_mcp_core::{EnvSnapshot, LauncherConfig, Platform};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let env = EnvSnapshot::capture();
    logging::init(env.is_truthy(DEBUG_VAR));

    let config = LauncherConfig::for_current_exe(&env)
        .context("failed to resolve the launcher's installation directory")?;
    tracing::debug!("Install dir: {}", config.install_dir.display());
    tracing::debug!("Script path: {}", config.script_path.display());

    let code = claude_cli_mcp::launch(&config, env, Platform::detect()).await;
    std::process::exit(code);
}
