//! Property-based tests for WSL path translation.

use std::path::Path;

use proptest::prelude::*;

use claude_cli_mcp_core::{resolve_script_path, to_compat_path, InvocationPrefix};

/// A single path component without separators or colons.
fn component() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_. -]{1,12}"
}

/// A Windows path with a drive letter, e.g. `C:\a\b.py`.
fn drive_path() -> impl Strategy<Value = (char, Vec<String>)> {
    (
        prop::char::ranges(vec!['a'..='z', 'A'..='Z'].into()),
        prop::collection::vec(component(), 0..6),
    )
}

proptest! {
    /// Translated paths never contain a backslash.
    #[test]
    fn output_has_no_backslashes(input in ".*") {
        prop_assert!(!to_compat_path(&input).contains('\\'));
    }

    /// Translating an already translated path changes nothing.
    #[test]
    fn translation_is_idempotent(input in ".*") {
        let once = to_compat_path(&input);
        prop_assert_eq!(to_compat_path(&once), once);
    }

    /// Drive paths land under /mnt/<lowercase letter>/ with components intact.
    #[test]
    fn drive_paths_map_under_mnt((drive, parts) in drive_path()) {
        let native = format!("{}:\\{}", drive, parts.join("\\"));
        let expected = format!("/mnt/{}/{}", drive.to_ascii_lowercase(), parts.join("/"));
        prop_assert_eq!(to_compat_path(&native), expected);
    }

    /// Paths without a drive letter only have their separators normalized.
    #[test]
    fn non_drive_paths_only_normalize(parts in prop::collection::vec(component(), 1..6)) {
        let native = format!("\\{}", parts.join("\\"));
        prop_assert_eq!(to_compat_path(&native), native.replace('\\', "/"));
    }

    /// Native prefixes never rewrite the script path.
    #[test]
    fn native_prefix_is_identity(input in ".*") {
        let prefix = InvocationPrefix::native("python3");
        let native = Path::new(&input);
        prop_assert_eq!(resolve_script_path(&prefix, native), native.as_os_str());
    }
}
