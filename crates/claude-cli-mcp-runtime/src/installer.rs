//! Post-install dependency setup.
//!
//! Installs the server's Python requirements with `pip`. A failed install is
//! downgraded to a warning so package installation itself still succeeds;
//! only a missing manifest is fatal.

use std::path::Path;

use claude_cli_mcp_core::config::MANIFEST_FILE;
use claude_cli_mcp_core::{Error, Result};
use tokio::process::Command;
use tracing::{debug, warn};

/// Result of a dependency install that did not hit a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The installer exited successfully
    Installed,
    /// The installer failed; the user was told how to retry by hand
    Failed,
}

/// External package installer invocation, `pip install -r` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyInstaller {
    program: String,
    leading_args: Vec<String>,
}

impl Default for DependencyInstaller {
    fn default() -> Self {
        Self::pip()
    }
}

impl DependencyInstaller {
    /// `pip install -r <manifest>`.
    pub fn pip() -> Self {
        Self::new("pip", ["install", "-r"])
    }

    /// Installer run as `program leading_args... <manifest>`.
    pub fn new<I, S>(program: impl Into<String>, leading_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            leading_args: leading_args.into_iter().map(Into::into).collect(),
        }
    }

    /// Command the user can run by hand after a failed install.
    pub fn manual_command(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.leading_args.iter().cloned());
        parts.push(MANIFEST_FILE.to_string());
        parts.join(" ")
    }

    /// Install the requirements listed in `manifest`.
    ///
    /// Returns [`Error::ManifestMissing`] without running anything if the
    /// manifest does not exist. Installer failures are reported and yield
    /// [`InstallOutcome::Failed`].
    pub async fn install(&self, manifest: &Path) -> Result<InstallOutcome> {
        println!("📦 Installing Python dependencies...");

        if !manifest.exists() {
            return Err(Error::ManifestMissing(manifest.to_path_buf()));
        }

        match self.run(manifest).await {
            Ok(()) => {
                println!("✅ Python dependencies installed successfully");
                Ok(InstallOutcome::Installed)
            }
            Err(e) => {
                warn!("{}", e);
                eprintln!("❌ Failed to install Python dependencies");
                eprintln!("Please run: {}", self.manual_command());
                Ok(InstallOutcome::Failed)
            }
        }
    }

    async fn run(&self, manifest: &Path) -> Result<()> {
        debug!(
            "Running: {} {} {}",
            self.program,
            self.leading_args.join(" "),
            manifest.display()
        );

        let status = Command::new(&self.program)
            .args(&self.leading_args)
            .arg(manifest)
            .status()
            .await
            .map_err(|e| Error::InstallFailed(format!("could not run {}: {e}", self.program)))?;

        if !status.success() {
            return Err(Error::InstallFailed(format!(
                "{} exited with {status}",
                self.program
            )));
        }

        Ok(())
    }
}
