//! Path translation across the WSL boundary.
//!
//! Windows drive paths are visible inside WSL under `/mnt/<drive>/`. The
//! functions here only rewrite strings; they never touch the filesystem.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::InvocationPrefix;

lazy_static! {
    static ref DRIVE_PREFIX: Regex = Regex::new(r"^([A-Za-z]):").expect("valid drive regex");
}

/// Convert a native Windows path into the form WSL addresses it by.
///
/// Backslashes become forward slashes. A leading drive letter `X:` is
/// rewritten to `/mnt/x`. Paths without a drive letter are returned
/// normalized but otherwise unchanged.
///
/// # Examples
///
/// ```
/// use claude_cli_mcp_core::path::to_compat_path;
///
/// assert_eq!(to_compat_path(r"C:\a\b\c.py"), "/mnt/c/a/b/c.py");
/// assert_eq!(to_compat_path(r"relative\dir"), "relative/dir");
/// ```
pub fn to_compat_path(native: &str) -> String {
    let normalized = native.replace('\\', "/");

    let Some(caps) = DRIVE_PREFIX.captures(&normalized) else {
        return normalized;
    };

    let drive = caps[1].to_ascii_lowercase();
    let rest = &normalized[caps[0].len()..];
    if rest.starts_with('/') {
        format!("/mnt/{drive}{rest}")
    } else {
        format!("/mnt/{drive}/{rest}")
    }
}

/// Resolve the script path the interpreter behind `prefix` should be given.
///
/// Native prefixes get `native` back untouched, byte for byte. WSL prefixes
/// get [`to_compat_path`] of its string form.
pub fn resolve_script_path<'a>(prefix: &InvocationPrefix, native: &'a Path) -> Cow<'a, OsStr> {
    if prefix.via_compat() {
        Cow::Owned(OsString::from(to_compat_path(&native.to_string_lossy())))
    } else {
        Cow::Borrowed(native.as_os_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_path() {
        assert_eq!(to_compat_path(r"C:\a\b\c.py"), "/mnt/c/a/b/c.py");
        assert_eq!(to_compat_path("D:/work/server.py"), "/mnt/d/work/server.py");
    }

    #[test]
    fn test_drive_letter_is_lowercased() {
        assert_eq!(to_compat_path(r"z:\x"), "/mnt/z/x");
        assert_eq!(to_compat_path(r"Z:\x"), "/mnt/z/x");
    }

    #[test]
    fn test_drive_relative_gets_separator() {
        assert_eq!(to_compat_path("C:foo"), "/mnt/c/foo");
    }

    #[test]
    fn test_bare_drive_root() {
        assert_eq!(to_compat_path(r"C:\"), "/mnt/c/");
    }

    #[test]
    fn test_no_drive_letter() {
        assert_eq!(to_compat_path(r"\\server\share\x.py"), "//server/share/x.py");
        assert_eq!(to_compat_path("/usr/lib/x.py"), "/usr/lib/x.py");
        assert_eq!(to_compat_path(""), "");
    }

    #[test]
    fn test_already_translated_is_unchanged() {
        let once = to_compat_path(r"C:\Users\me\server.py");
        assert_eq!(to_compat_path(&once), once);
    }

    #[test]
    fn test_resolve_native_is_identity() {
        let prefix = InvocationPrefix::native("python3");
        let native = Path::new(r"C:\a\b.py");
        assert_eq!(resolve_script_path(&prefix, native), native.as_os_str());
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_native_keeps_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let native = Path::new(OsStr::from_bytes(b"/opt/pkg\xff/src/server.py"));
        let prefix = InvocationPrefix::native("python3");
        let resolved = resolve_script_path(&prefix, native);
        assert_eq!(resolved.as_bytes(), b"/opt/pkg\xff/src/server.py");
    }

    #[test]
    fn test_resolve_wsl_translates() {
        let prefix = InvocationPrefix::wsl("python3");
        assert_eq!(
            resolve_script_path(&prefix, Path::new(r"C:\a\b.py")),
            OsStr::new("/mnt/c/a/b.py")
        );
    }
}
