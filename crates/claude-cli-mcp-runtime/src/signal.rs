//! Signal relay between the launcher and its child.
//!
//! The launcher never acts on SIGINT or SIGTERM itself. Each one is sent on
//! to the child, which decides how to shut down; the launcher keeps waiting
//! and reports whatever exit status the child ends with.

use std::io;
use std::process::ExitStatus;

use tokio::process::Child;
use tracing::debug;

#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;
#[cfg(unix)]
use tokio::signal::unix::{signal as listen, SignalKind};
#[cfg(unix)]
use tracing::warn;

/// Registered handlers for the interactive termination signals.
///
/// Register before spawning the child so no signal slips through between
/// spawn and wait.
#[cfg(unix)]
pub struct SignalRelay {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl SignalRelay {
    /// Install SIGINT and SIGTERM handlers.
    pub fn register() -> io::Result<Self> {
        Ok(Self {
            interrupt: listen(SignalKind::interrupt())?,
            terminate: listen(SignalKind::terminate())?,
        })
    }

    /// Wait for `child` to exit, forwarding signals to it meanwhile.
    pub async fn wait(&mut self, child: &mut Child) -> io::Result<ExitStatus> {
        let pid = child.id();

        loop {
            tokio::select! {
                status = child.wait() => return status,
                Some(()) = self.interrupt.recv() => forward(pid, Signal::SIGINT),
                Some(()) = self.terminate.recv() => forward(pid, Signal::SIGTERM),
            }
        }
    }
}

/// Send `sig` to the child with the given PID.
///
/// A child that has already exited is not an error; its status is collected
/// by the pending wait.
#[cfg(unix)]
pub fn forward(pid: Option<u32>, sig: Signal) {
    let Some(pid) = pid else {
        debug!("Child already reaped, dropping {}", sig);
        return;
    };

    debug!("Forwarding {} to child pid={}", sig, pid);
    match signal::kill(Pid::from_raw(pid as i32), sig) {
        Ok(()) => {}
        Err(nix::errno::Errno::ESRCH) => debug!("Child pid={} already exited", pid),
        Err(e) => warn!("Failed to forward {} to child pid={}: {}", sig, pid, e),
    }
}

/// Ctrl+C handling on Windows.
///
/// The console delivers Ctrl+C to every process attached to it, child
/// included, so there is nothing to forward. Listening keeps the launcher
/// alive until the child has exited.
#[cfg(not(unix))]
pub struct SignalRelay;

#[cfg(not(unix))]
impl SignalRelay {
    /// Nothing to install up front; Ctrl+C is awaited inside [`wait`](Self::wait).
    pub fn register() -> io::Result<Self> {
        Ok(Self)
    }

    /// Wait for `child` to exit, swallowing Ctrl+C meanwhile.
    pub async fn wait(&mut self, child: &mut Child) -> io::Result<ExitStatus> {
        loop {
            tokio::select! {
                status = child.wait() => return status,
                result = tokio::signal::ctrl_c() => {
                    result?;
                    debug!("Ctrl+C received; child shares the console and handles it");
                }
            }
        }
    }
}
