//! # claude-cli-mcp-core
//!
//! Core types for the Claude CLI MCP launcher.
//!
//! This crate has **no internal dependencies** on other claude-cli-mcp crates.
//! It provides:
//!
//! - Host platform detection
//! - The invocation prefix produced by the interpreter locator
//! - Path translation into WSL's `/mnt/<drive>` scheme
//! - Launcher configuration and the child environment snapshot
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 - the runtime and binary crates depend on it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod invocation;
pub mod path;
pub mod platform;

// Re-export commonly used types
pub use config::{EnvSnapshot, LauncherConfig};
pub use error::{Error, Result, MIN_PYTHON_VERSION};
pub use invocation::InvocationPrefix;
pub use path::{resolve_script_path, to_compat_path};
pub use platform::Platform;
