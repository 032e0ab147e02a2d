//! Error types for the Claude CLI MCP launcher.

use std::path::PathBuf;

use thiserror::Error;

/// Oldest Python release the server script supports.
pub const MIN_PYTHON_VERSION: &str = "3.8";

/// Main error type for launcher and installer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No candidate interpreter passed its liveness test
    #[error("Python not found. Please install Python {MIN_PYTHON_VERSION} or later.")]
    InterpreterNotFound,

    /// The server script is missing from its fixed location
    #[error("Script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    /// The child process could not be started
    #[error("Failed to start MCP server: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// `requirements.txt` is missing from the package root
    #[error("requirements.txt not found: {}", .0.display())]
    ManifestMissing(PathBuf),

    /// The package installer ran but did not succeed
    #[error("Failed to install Python dependencies: {0}")]
    InstallFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this is a spawn failure caused by a missing executable.
    pub fn is_command_not_found(&self) -> bool {
        matches!(
            self,
            Error::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
