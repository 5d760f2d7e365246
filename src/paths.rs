//! Path helpers shared by the resolution steps.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// Paths that do not start with `~`, and a `~` when no home directory can be
/// determined, are returned as given.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if path == Path::new("~") {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Ok(rest) = path.strip_prefix("~/") {
        if let Some(mut home) = dirs::home_dir() {
            home.push(rest);
            return home;
        }
    }
    path.to_path_buf()
}

/// Resolve `path` against the working directory after tilde expansion.
///
/// Absolute paths are untouched by the join.
pub fn resolve_from(cwd: &Path, path: &Path) -> PathBuf {
    cwd.join(expand_tilde(path))
}
