//! Host platform detection.
//!
//! The launcher only cares about one distinction: whether the host can reach
//! a Linux userland through the Windows Subsystem for Linux. That is the case
//! on native Windows only; a process already running inside WSL is treated as
//! ordinary Linux.

/// Host platforms the launcher runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Native Linux (not WSL)
    Linux,
    /// macOS
    MacOS,
    /// Native Windows
    Windows,
    /// Windows Subsystem for Linux
    WSL,
    /// Any other Unix-like target
    Other,
}

impl Platform {
    /// Detect the current platform at runtime.
    ///
    /// # Platform Detection Logic
    ///
    /// - **WSL**: target_os = "linux" and `/proc/version` mentions "microsoft"
    /// - **Linux**: target_os = "linux" and not WSL
    /// - **macOS**: target_os = "macos"
    /// - **Windows**: target_os = "windows"
    pub fn detect() -> Self {
        #[cfg(target_os = "linux")]
        {
            if Self::is_wsl() {
                return Platform::WSL;
            }
            Platform::Linux
        }

        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }

        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            Platform::Other
        }
    }

    /// Check if running under Windows Subsystem for Linux (WSL).
    ///
    /// Detection strategies:
    /// 1. Check `/proc/version` for "microsoft" (any case)
    /// 2. Check for `/proc/sys/fs/binfmt_misc/WSLInterop`
    #[cfg(target_os = "linux")]
    fn is_wsl() -> bool {
        if let Ok(version) = std::fs::read_to_string("/proc/version") {
            if version.to_lowercase().contains("microsoft") {
                return true;
            }
        }

        std::path::Path::new("/proc/sys/fs/binfmt_misc/WSLInterop").exists()
    }

    /// Get the platform name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::MacOS => "macOS",
            Platform::Windows => "Windows",
            Platform::WSL => "WSL",
            Platform::Other => "other",
        }
    }

    /// Whether Python may be reached through the WSL compatibility layer.
    ///
    /// Only native Windows hosts qualify. Inside WSL the interpreter is native.
    pub fn supports_compat_layer(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
