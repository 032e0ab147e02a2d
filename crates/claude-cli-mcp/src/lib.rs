//! Claude CLI MCP launcher library
//!
//! Glue between the runtime crate and the two binaries: the launcher
//! (`claude-cli-mcp`) and the post-install step (`claude-cli-mcp-postinstall`).

pub mod logging;
pub mod report;

use claude_cli_mcp_core::{EnvSnapshot, LauncherConfig, Platform};
use claude_cli_mcp_runtime::{DependencyInstaller, InstallOutcome, InterpreterLocator, Launcher};
use tracing::debug;

pub use report::{report_failure, FAILURE_EXIT_CODE};

/// Find Python, run the server script and return the exit code to use.
pub async fn launch(config: &LauncherConfig, env: EnvSnapshot, platform: Platform) -> i32 {
    let prefix = match InterpreterLocator::new(platform).locate() {
        Ok(prefix) => prefix,
        Err(e) => return report_failure(&e, platform),
    };
    debug!("Python command: {}", prefix);

    match Launcher::new(prefix, env).run(&config.script_path).await {
        Ok(code) => code,
        Err(e) => report_failure(&e, platform),
    }
}

/// Install the server's Python requirements and return the exit code to use.
///
/// Only a missing manifest fails; a failed `pip` run still exits 0.
pub async fn postinstall(config: &LauncherConfig, platform: Platform) -> i32 {
    match DependencyInstaller::pip().install(&config.manifest_path).await {
        Ok(InstallOutcome::Installed) => 0,
        Ok(InstallOutcome::Failed) => {
            debug!("Dependency install failed; continuing package installation");
            0
        }
        Err(e) => report_failure(&e, platform),
    }
}
