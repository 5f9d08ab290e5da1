//! Install candidates: one place a configured package provides an executable.

use std::path::{Path, PathBuf};

/// A configured location where a versioned package provides an executable.
///
/// Precedence is not stored on the candidate itself; it is the candidate's
/// position in the [`ConfigurationIndex`](crate::ConfigurationIndex), which
/// follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCandidate {
    package: String,
    version: String,
    install_root: PathBuf,
    relative_path: PathBuf,
}

impl InstallCandidate {
    pub fn new(
        package: impl Into<String>,
        version: impl Into<String>,
        install_root: impl Into<PathBuf>,
        relative_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
            install_root: install_root.into(),
            relative_path: relative_path.into(),
        }
    }

    /// Owning package identifier (e.g. `cli/cli`).
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Version identifier as declared (e.g. `v2.4.0`).
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Install root joined with the relative binary path.
    pub fn executable_path(&self) -> PathBuf {
        self.install_root.join(&self.relative_path)
    }

    /// True when both candidates come from the same package release.
    pub(crate) fn same_release(&self, other: &Self) -> bool {
        self.package == other.package && self.version == other.version
    }
}
