//! Invocation prefix: the leading tokens needed to run an interpreter.

/// Entry command and arguments that run a program inside WSL.
pub const WSL_ENTRY: [&str; 2] = ["wsl", "-e"];

/// Ordered command tokens identifying a runnable interpreter.
///
/// The first token is the executable; the rest are fixed leading arguments.
/// A prefix is never empty and is not modified after the locator resolves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationPrefix {
    tokens: Vec<String>,
    via_compat: bool,
}

impl InvocationPrefix {
    /// Prefix for an interpreter on the host's own `PATH`.
    pub fn native(interpreter: impl Into<String>) -> Self {
        Self {
            tokens: vec![interpreter.into()],
            via_compat: false,
        }
    }

    /// Prefix for an interpreter inside WSL, e.g. `wsl -e python3`.
    pub fn wsl(interpreter: impl Into<String>) -> Self {
        let mut tokens: Vec<String> = WSL_ENTRY.iter().map(|s| s.to_string()).collect();
        tokens.push(interpreter.into());
        Self {
            tokens,
            via_compat: true,
        }
    }

    /// The executable to spawn.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Fixed arguments placed before any caller-supplied ones.
    pub fn leading_args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// All tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether this prefix runs through the compatibility subsystem.
    pub fn via_compat(&self) -> bool {
        self.via_compat
    }

    /// Leading arguments followed by `extra`, ready for `Command::args`.
    pub fn args_with<I, S>(&self, extra: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args()
            .iter()
            .cloned()
            .chain(extra.into_iter().map(Into::into))
            .collect()
    }
}

impl std::fmt::Display for InvocationPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_prefix() {
        let prefix = InvocationPrefix::native("python3");
        assert_eq!(prefix.program(), "python3");
        assert!(prefix.leading_args().is_empty());
        assert!(!prefix.via_compat());
    }

    #[test]
    fn test_wsl_prefix() {
        let prefix = InvocationPrefix::wsl("python");
        assert_eq!(prefix.tokens(), &["wsl", "-e", "python"]);
        assert_eq!(prefix.program(), "wsl");
        assert_eq!(prefix.leading_args(), &["-e", "python"]);
        assert!(prefix.via_compat());
    }

    #[test]
    fn test_args_with() {
        let prefix = InvocationPrefix::wsl("python3");
        assert_eq!(
            prefix.args_with(["--version"]),
            vec!["-e", "python3", "--version"]
        );

        let native = InvocationPrefix::native("python");
        assert_eq!(native.args_with(["server.py"]), vec!["server.py"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(InvocationPrefix::wsl("python3").to_string(), "wsl -e python3");
        assert_eq!(InvocationPrefix::native("python").to_string(), "python");
    }
}
