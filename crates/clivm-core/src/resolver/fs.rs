//! Filesystem provider trait for testable executable probes.

use std::io;
use std::path::Path;

use super::types::AttemptOutcome;

/// Trait for filesystem probes (injectable for testing).
pub trait FsProvider {
    /// Check whether `path` is a regular file the current user may execute.
    ///
    /// Never fails: every I/O problem is folded into the returned outcome.
    fn check_executable(&self, path: &Path) -> AttemptOutcome;
}

/// Production filesystem provider backed by real metadata lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        // Follows symlinks: a link to an executable is an executable.
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return AttemptOutcome::NotFound,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                return AttemptOutcome::PermissionDenied;
            }
            Err(e) => return AttemptOutcome::IoError(e.to_string()),
        };

        if !metadata.is_file() {
            return AttemptOutcome::NotAFile;
        }

        #[cfg(unix)]
        {
            use nix::errno::Errno;
            use nix::unistd::{AccessFlags, access};

            match access(path, AccessFlags::X_OK) {
                Ok(()) => {}
                Err(Errno::EACCES) => return AttemptOutcome::NotExecutable,
                Err(Errno::ENOENT) => return AttemptOutcome::NotFound,
                Err(e) => return AttemptOutcome::IoError(e.desc().to_string()),
            }
        }

        AttemptOutcome::Ok
    }
}

/// Test/mock filesystem provider with predefined responses.
#[cfg(test)]
#[derive(Default)]
pub struct MockFs {
    executables: std::collections::HashSet<std::path::PathBuf>,
    non_executables: std::collections::HashSet<std::path::PathBuf>,
    directories: std::collections::HashSet<std::path::PathBuf>,
    denied: std::collections::HashSet<std::path::PathBuf>,
}

#[cfg(test)]
impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.executables.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_non_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.non_executables.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_directory(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.directories.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_denied(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.denied.insert(path.into());
        self
    }
}

#[cfg(test)]
impl FsProvider for MockFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        if self.executables.contains(path) {
            AttemptOutcome::Ok
        } else if self.non_executables.contains(path) {
            AttemptOutcome::NotExecutable
        } else if self.directories.contains(path) {
            AttemptOutcome::NotAFile
        } else if self.denied.contains(path) {
            AttemptOutcome::PermissionDenied
        } else {
            AttemptOutcome::NotFound
        }
    }
}
