//! Path utilities for the VFS layer.
//!
//! Provides normalization, display, and join helpers. None of these
//! fail: every input maps to some absolute path.

use alloc::string::String;
use alloc::vec::Vec;

use crate::HOME_DIR;

/// Normalize a user-typed path against a working directory.
///
/// - `~` (and the empty string) resolve to the home directory, `~/x` to a
///   path below it
/// - relative paths are joined onto `cwd`
/// - `.` and `..` are collapsed lexically; `..` at the root is dropped
///
/// The result is always absolute with no trailing slash (except `/`).
pub fn normalize_path(raw: &str, cwd: &str) -> String {
    let expanded = expand_home(raw);
    let absolute = if expanded.starts_with('/') {
        expanded
    } else {
        let base = expand_home(cwd);
        let mut joined = String::with_capacity(base.len() + expanded.len() + 1);
        joined.push_str(&base);
        joined.push('/');
        joined.push_str(&expanded);
        joined
    };

    let mut components: Vec<&str> = Vec::new();
    for component in absolute.split('/') {
        match component {
            "" | "." => continue,
            ".." => {
                components.pop();
            }
            c => components.push(c),
        }
    }

    if components.is_empty() {
        String::from("/")
    } else {
        let mut result = String::new();
        for component in components {
            result.push('/');
            result.push_str(component);
        }
        result
    }
}

fn expand_home(raw: &str) -> String {
    if raw.is_empty() || raw == "~" {
        String::from(HOME_DIR)
    } else if let Some(rest) = raw.strip_prefix("~/") {
        join_path(HOME_DIR, rest)
    } else {
        String::from(raw)
    }
}

/// Render a path for the terminal prompt, abbreviating the home directory.
pub fn display_path(path: &str) -> String {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    if trimmed == HOME_DIR {
        return String::from("~");
    }
    match trimmed.strip_prefix(HOME_DIR) {
        Some(rest) if rest.starts_with('/') => alloc::format!("~{}", rest),
        _ => String::from(trimmed),
    }
}

/// Join two path components.
pub fn join_path(base: &str, name: &str) -> String {
    if base == "/" || base.is_empty() {
        alloc::format!("/{}", name)
    } else {
        alloc::format!("{}/{}", base.trim_end_matches('/'), name)
    }
}
