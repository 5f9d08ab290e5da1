//! Root directory resolution and user path normalization.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the clivm root directory.
pub const ROOT_DIR_ENV: &str = "CLIVM_ROOT_DIR";

/// Default root directory name under the user's home directory.
pub const DEFAULT_ROOT_DIR_RELATIVE: &str = ".clivm";

/// Get the clivm root directory (package store and shims).
///
/// Resolution order:
/// 1. `CLIVM_ROOT_DIR` environment variable (highest priority)
/// 2. `~/.clivm`
///
/// The directory is not created; resolution never writes to disk.
pub fn root_dir() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(ROOT_DIR_ENV)
        && !path.trim().is_empty()
    {
        return normalize_user_path(&path);
    }

    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(home.join(DEFAULT_ROOT_DIR_RELATIVE))
}

/// Directory holding installed packages: `<root>/pkgs`.
pub fn pkgs_dir(root: &Path) -> PathBuf {
    root.join("pkgs")
}

/// Directory holding clivm's own command shims: `<root>/bin`.
///
/// Shims dispatch back into clivm, so this directory is removed from the
/// search path before falling back to it.
pub fn shim_dir(root: &Path) -> PathBuf {
    root.join("bin")
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = expand_home(trimmed)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

/// Expand a leading `~` or `~/` against the home directory.
pub(crate) fn expand_home(raw: &str) -> Result<PathBuf, PathError> {
    if raw == "~" {
        return dirs::home_dir().ok_or(PathError::NoHomeDir);
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(raw))
}
