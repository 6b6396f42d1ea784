//! Shared helpers for tree loading

use std::path::Path;

use glob::Pattern;

/// Name of a path's final component, lossily converted.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Name used for the root node.
///
/// Paths like `.` or `..` have no final component, so fall back to the
/// canonical path's name and finally to the path as written.
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|s| s.to_string_lossy().to_string()))
        })
        .unwrap_or_else(|| root.display().to_string())
}

/// Check if an entry should be left out of the tree based on its name.
pub fn should_skip_entry(name: &str, ignore_patterns: &[String]) -> bool {
    // Hidden entries (.git, .env, ...) never make it into the tree
    if name.starts_with('.') {
        return true;
    }

    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
