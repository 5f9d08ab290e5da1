//! All clivm directories captured in one call, for `clivm paths`.

use std::fmt;
use std::path::PathBuf;

use super::{PathError, pkgs_dir, root_dir, shim_dir};

/// Resolved clivm directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory (`CLIVM_ROOT_DIR` or `~/.clivm`)
    pub root_dir: PathBuf,
    /// Installed package store
    pub pkgs_dir: PathBuf,
    /// Command shims, excluded from the search path fallback
    pub shim_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self::from_root(root_dir()?))
    }

    /// Derive every path from an already-known root.
    pub fn from_root(root_dir: PathBuf) -> Self {
        Self {
            pkgs_dir: pkgs_dir(&root_dir),
            shim_dir: shim_dir(&root_dir),
            root_dir,
        }
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "root_dir = {}", self.root_dir.display())?;
        writeln!(f, "pkgs_dir = {}", self.pkgs_dir.display())?;
        write!(f, "shim_dir = {}", self.shim_dir.display())
    }
}
