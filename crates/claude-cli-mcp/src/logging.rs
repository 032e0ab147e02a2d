//! Diagnostic logging setup.
//!
//! Everything goes to stderr: stdout belongs to the MCP server child and any
//! stray byte there would corrupt the JSON-RPC stream.

use tracing_subscriber::EnvFilter;

/// Filter used when `DEBUG` is set.
pub const DEBUG_FILTER: &str = "debug";

/// Filter used when neither `DEBUG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Pick the log filter: `DEBUG` wins, then `RUST_LOG`, then warnings only.
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new(DEBUG_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber.
pub fn init(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
