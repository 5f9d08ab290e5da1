//! Snapshot of the ambient search path.
//!
//! The snapshot is taken once per request and never re-reads the process
//! environment, so a resolver holding it is deterministic and can be shared
//! across threads.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::env::{EnvProvider, SystemEnv};

/// Default executable extensions when `PATHEXT` is not set.
#[cfg(windows)]
const DEFAULT_PATHEXT: &[&str] = &[".COM", ".EXE", ".BAT", ".CMD"];

/// Ordered search directories, highest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPathEntries {
    dirs: Vec<PathBuf>,
    /// Suffixes tried after the bare name (Windows `PATHEXT`; empty elsewhere).
    extensions: Vec<String>,
}

impl SearchPathEntries {
    /// Use `dirs` verbatim, in the given order.
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            extensions: Vec::new(),
        }
    }

    /// Split a PATH-like value with the platform separator.
    ///
    /// Empty entries are ignored. Relative entries are made absolute against
    /// `base_dir`; without a base they are dropped, since their meaning would
    /// depend on whatever the working directory is at probe time.
    pub fn from_path_var(value: &OsStr, base_dir: Option<&Path>) -> Self {
        let mut dirs = Vec::new();
        for entry in env::split_paths(value) {
            if entry.as_os_str().is_empty() {
                continue;
            }
            if entry.is_absolute() {
                dirs.push(entry);
            } else if let Some(base) = base_dir {
                dirs.push(base.join(entry));
            } else {
                tracing::debug!(entry = %entry.display(), "Skipping relative PATH entry");
            }
        }
        Self {
            dirs,
            extensions: Vec::new(),
        }
    }

    /// Capture `PATH` (and `PATHEXT` on Windows) from `env`.
    pub fn capture(env: &dyn EnvProvider, base_dir: Option<&Path>) -> Self {
        #[cfg_attr(not(windows), allow(unused_mut))]
        let mut entries = env
            .var_os("PATH")
            .map(|value| Self::from_path_var(&value, base_dir))
            .unwrap_or_default();

        #[cfg(windows)]
        {
            entries.extensions = match env.var_nonempty("PATHEXT") {
                Some(pathext) => pathext
                    .split(';')
                    .filter(|ext| !ext.is_empty())
                    .map(str::to_string)
                    .collect(),
                None => DEFAULT_PATHEXT.iter().map(|ext| (*ext).to_string()).collect(),
            };
        }

        tracing::trace!(dirs = entries.dirs.len(), "Captured search path");
        entries
    }

    /// Capture the real process environment and working directory.
    pub fn from_env() -> Self {
        let cwd = env::current_dir().ok();
        Self::capture(&SystemEnv, cwd.as_deref())
    }

    /// Replace the extension list tried after the bare name.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Drop every entry equal to `dir`.
    #[must_use]
    pub fn without(mut self, dir: &Path) -> Self {
        self.dirs.retain(|entry| entry != dir);
        self
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// File names probed in each directory for `name`, in order.
    pub(crate) fn file_names(&self, name: &str) -> Vec<String> {
        std::iter::once(name.to_string())
            .chain(self.extensions.iter().map(|ext| format!("{name}{ext}")))
            .collect()
    }
}
