//! Launching the MCP server script under the resolved interpreter.

use std::path::Path;
use std::process::Stdio;

use claude_cli_mcp_core::{resolve_script_path, EnvSnapshot, Error, InvocationPrefix, Result};
use tokio::process::Command;
use tracing::{debug, info};

use crate::signal::SignalRelay;

/// Runs the server script as a child with inherited stdio.
#[derive(Debug, Clone)]
pub struct Launcher {
    prefix: InvocationPrefix,
    env: EnvSnapshot,
}

impl Launcher {
    /// Launcher for a resolved interpreter and a parent environment snapshot.
    pub fn new(prefix: InvocationPrefix, env: EnvSnapshot) -> Self {
        Self { prefix, env }
    }

    /// Build the child command for `script`, without checking it exists.
    ///
    /// `script` is the native path; it is translated when the prefix goes
    /// through WSL.
    pub fn command(&self, script: &Path) -> Command {
        let resolved = resolve_script_path(&self.prefix, script);
        if self.prefix.via_compat() {
            debug!("Converted path: {}", resolved.to_string_lossy());
        }

        let child_env = self.env.for_child(self.prefix.via_compat());

        let mut cmd = Command::new(self.prefix.program());
        cmd.args(self.prefix.leading_args())
            .arg(&resolved)
            .env_clear()
            .envs(child_env.iter())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run `script` to completion and return its exit code.
    ///
    /// Fails with [`Error::ScriptNotFound`] before spawning anything if the
    /// native path does not exist. A child that reports no code (terminated
    /// by a signal) yields 0.
    pub async fn run(&self, script: &Path) -> Result<i32> {
        if !script.exists() {
            return Err(Error::ScriptNotFound(script.to_path_buf()));
        }

        let mut cmd = self.command(script);
        let mut relay = SignalRelay::register()?;

        debug!("Spawning: {} {}", self.prefix, script.display());
        let mut child = cmd.spawn().map_err(|source| Error::Spawn {
            program: self.prefix.program().to_string(),
            source,
        })?;
        info!("MCP server started: pid={:?}", child.id());

        let status = relay.wait(&mut child).await?;
        let code = status.code().unwrap_or(0);
        debug!("Process exited with code: {:?} ({})", status.code(), status);

        Ok(code)
    }
}
