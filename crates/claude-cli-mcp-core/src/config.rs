//! Launcher configuration and the environment snapshot handed to the child.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Environment variable that switches on diagnostic logging.
pub const DEBUG_VAR: &str = "DEBUG";

/// Variable forcing the Python child to write stdout unbuffered.
pub const UNBUFFERED_VAR: &str = "PYTHONUNBUFFERED";

/// Variable WSL reads to decide which variables cross into Linux.
pub const WSLENV_VAR: &str = "WSLENV";

/// Server script location, relative to the package root.
pub const SCRIPT_RELATIVE_PATH: [&str; 2] = ["src", "claude_cli_server.py"];

/// Dependency manifest name, at the package root.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// Immutable copy of a process environment.
///
/// Captured once at startup and passed to the spawn call; the launcher never
/// mutates its own environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<OsString, OsString>,
}

impl EnvSnapshot {
    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    /// Look up a variable.
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Whether `key` is set to a non-empty value.
    pub fn is_truthy(&self, key: impl AsRef<OsStr>) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// A copy with `key` set to `value`.
    pub fn with(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Iterate over all variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// The environment the server child runs with.
    ///
    /// Adds `PYTHONUNBUFFERED=1`. Through WSL the variable is also listed in
    /// `WSLENV` (appended after any existing entries) so it crosses the
    /// boundary.
    pub fn for_child(&self, via_compat: bool) -> Self {
        let env = self.clone().with(UNBUFFERED_VAR, "1");
        if !via_compat {
            return env;
        }

        let entry = format!("{UNBUFFERED_VAR}/u");
        let wslenv = match self.get(WSLENV_VAR).and_then(OsStr::to_str) {
            Some(existing) if !existing.is_empty() => format!("{existing}:{entry}"),
            _ => entry,
        };
        env.with(WSLENV_VAR, wslenv)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Resolved launcher configuration.
///
/// Nothing here is user-configurable beyond `DEBUG`: both paths are fixed
/// relative to the installation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Directory holding the launcher executable
    pub install_dir: PathBuf,
    /// Native path of the server script
    pub script_path: PathBuf,
    /// Native path of the dependency manifest
    pub manifest_path: PathBuf,
    /// Diagnostic logging requested through `DEBUG`
    pub debug: bool,
}

impl LauncherConfig {
    /// Derive the configuration for an installation directory.
    ///
    /// The package root is the parent of `install_dir` (binaries live in
    /// `<root>/bin`).
    pub fn from_env(env: &EnvSnapshot, install_dir: impl Into<PathBuf>) -> Self {
        let install_dir = install_dir.into();
        let root = package_root(&install_dir);

        let script_path = SCRIPT_RELATIVE_PATH
            .iter()
            .fold(root.clone(), |path, part| path.join(part));
        let manifest_path = root.join(MANIFEST_FILE);

        Self {
            install_dir,
            script_path,
            manifest_path,
            debug: env.is_truthy(DEBUG_VAR),
        }
    }

    /// Configuration for the running executable's installation.
    pub fn for_current_exe(env: &EnvSnapshot) -> crate::Result<Self> {
        let exe = std::env::current_exe()?;
        let exe = exe.canonicalize().unwrap_or(exe);
        let install_dir = exe.parent().ok_or_else(|| {
            crate::Error::Config(format!(
                "executable path has no parent directory: {}",
                exe.display()
            ))
        })?;
        Ok(Self::from_env(env, install_dir))
    }
}

fn package_root(install_dir: &Path) -> PathBuf {
    install_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| install_dir.to_path_buf())
}
