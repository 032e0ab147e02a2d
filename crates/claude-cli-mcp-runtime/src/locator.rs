//! Interpreter discovery.
//!
//! Candidates are tried in a fixed order and the first one whose liveness
//! test succeeds wins. On native Windows the WSL candidates come first,
//! provided `wsl --status` answers; otherwise (or if WSL has no Python) the
//! host's own `PATH` is searched.

use std::process::{Command, Stdio};

use claude_cli_mcp_core::invocation::WSL_ENTRY;
use claude_cli_mcp_core::{Error, InvocationPrefix, Platform, Result};
use tracing::debug;

/// Interpreter names in preference order.
pub const INTERPRETER_NAMES: [&str; 2] = ["python3", "python"];

/// Runs a liveness test: a command whose only output is its exit status.
pub trait Prober {
    /// Run `program args...` and report whether it exited successfully.
    ///
    /// Must not write to the controlling terminal.
    fn probe(&self, program: &str, args: &[String]) -> bool;
}

/// Prober that executes the command with all stdio discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProber;

impl Prober for CommandProber {
    fn probe(&self, program: &str, args: &[String]) -> bool {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

/// One interpreter the locator may choose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    prefix: InvocationPrefix,
}

impl Candidate {
    /// Wrap a prefix as a candidate.
    pub fn new(prefix: InvocationPrefix) -> Self {
        Self { prefix }
    }

    /// The prefix used both for the liveness test and for the launch.
    pub fn prefix(&self) -> &InvocationPrefix {
        &self.prefix
    }

    /// Arguments of the version-check liveness test.
    pub fn liveness_args(&self) -> Vec<String> {
        self.prefix.args_with(["--version"])
    }

    /// Whether the candidate's version check succeeds.
    pub fn is_alive(&self, prober: &dyn Prober) -> bool {
        prober.probe(self.prefix.program(), &self.liveness_args())
    }
}

/// Locates a working Python 3 interpreter for the current host.
pub struct InterpreterLocator<P = CommandProber> {
    platform: Platform,
    prober: P,
}

impl InterpreterLocator<CommandProber> {
    /// Locator for the given platform, probing with real subprocesses.
    pub fn new(platform: Platform) -> Self {
        Self::with_prober(platform, CommandProber)
    }
}

impl Default for InterpreterLocator<CommandProber> {
    fn default() -> Self {
        Self::new(Platform::detect())
    }
}

impl<P: Prober> InterpreterLocator<P> {
    /// Locator using a custom prober.
    pub fn with_prober(platform: Platform, prober: P) -> Self {
        Self { platform, prober }
    }

    /// Candidates run through WSL, in preference order.
    pub fn wsl_candidates() -> Vec<Candidate> {
        INTERPRETER_NAMES
            .iter()
            .map(|name| Candidate::new(InvocationPrefix::wsl(*name)))
            .collect()
    }

    /// Candidates on the host's own `PATH`, in preference order.
    pub fn native_candidates() -> Vec<Candidate> {
        INTERPRETER_NAMES
            .iter()
            .map(|name| Candidate::new(InvocationPrefix::native(*name)))
            .collect()
    }

    /// Whether the WSL status probe succeeds.
    fn compat_available(&self) -> bool {
        self.prober.probe(WSL_ENTRY[0], &["--status".to_string()])
    }

    fn first_alive(&self, candidates: &[Candidate]) -> Option<InvocationPrefix> {
        candidates
            .iter()
            .find(|candidate| {
                let alive = candidate.is_alive(&self.prober);
                let verdict = if alive { "ok" } else { "not usable" };
                debug!("Probed {}: {}", candidate.prefix(), verdict);
                alive
            })
            .map(|candidate| candidate.prefix().clone())
    }

    /// Find the interpreter to launch the server with.
    pub fn locate(&self) -> Result<InvocationPrefix> {
        debug!("Platform: {}", self.platform);

        if self.platform.supports_compat_layer() {
            if self.compat_available() {
                debug!("WSL is available");
                if let Some(prefix) = self.first_alive(&Self::wsl_candidates()) {
                    return Ok(prefix);
                }
                debug!("No Python found in WSL, trying native Python");
            } else {
                debug!("WSL not available, trying native Python");
            }
        }

        if let Some(prefix) = self.first_alive(&Self::native_candidates()) {
            debug!("Found Python: {}", prefix);
            return Ok(prefix);
        }

        Err(Error::InterpreterNotFound)
    }
}
