//! # claude-cli-mcp-runtime
//!
//! Process-level work for the Claude CLI MCP launcher.
//!
//! This crate provides:
//! - Interpreter discovery (native or through WSL)
//! - Launching the server script with inherited stdio
//! - Relaying SIGINT/SIGTERM to the child
//! - The post-install `pip` step
//!
//! ## Architecture
//!
//! This is Layer 1 - it depends on claude-cli-mcp-core and is driven by the
//! binaries in claude-cli-mcp.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod installer;
pub mod launcher;
pub mod locator;
pub mod signal;

// Re-export commonly used types
pub use installer::{DependencyInstaller, InstallOutcome};
pub use launcher::Launcher;
pub use locator::{Candidate, CommandProber, InterpreterLocator, Prober, INTERPRETER_NAMES};
pub use signal::SignalRelay;
