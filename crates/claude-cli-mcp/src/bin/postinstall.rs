//! Post-install step: `pip install -r requirements.txt` from the package root.
//!
//! A failed install only warns, so installing the package itself never fails
//! on it. A missing `requirements.txt` exits with status 1.

use anyhow::Context;
use claude_cli_mcp::logging;
use claude_cli_mcp_core::config::DEBUG_VAR;
use claude_cli_mcp_core::{EnvSnapshot, LauncherConfig, Platform};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let env = EnvSnapshot::capture();
    logging::init(env.is_truthy(DEBUG_VAR));

    let config = LauncherConfig::for_current_exe(&env)
        .context("failed to resolve the package root")?;
    tracing::debug!("Install dir: {}", config.install_dir.display());
    tracing::debug!("Manifest path: {}", config.manifest_path.display());

    let code = claude_cli_mcp::postinstall(&config, Platform::detect()).await;
    std::process::exit(code);
}
