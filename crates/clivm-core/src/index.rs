//! In-memory index of configured executables.
//!
//! The index answers "which installed candidates provide executable X?"
//! without touching the filesystem. It is built once per request from loaded
//! manifests and is immutable afterwards, so a shared reference can be used
//! from any number of threads.

use std::collections::HashMap;

use crate::domain::{ExecutableName, InstallCandidate};

/// Mapping from executable name to candidates in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationIndex {
    entries: HashMap<String, Vec<InstallCandidate>>,
    /// Executable names in first-declaration order.
    names: Vec<ExecutableName>,
}

impl ConfigurationIndex {
    /// An index with no configured executables.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ConfigurationIndexBuilder {
        ConfigurationIndexBuilder::default()
    }

    /// Candidates for `name`, first-declared first. Unknown names yield an
    /// empty slice.
    pub fn lookup(&self, name: &str) -> &[InstallCandidate] {
        self.entries.get(name).map_or(&[], Vec::as_slice)
    }

    /// Configured executable names in the order they were first declared.
    pub fn executable_names(&self) -> &[ExecutableName] {
        &self.names
    }

    /// Number of distinct configured executable names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Collects declarations and enforces the (package, version) dedup rule.
#[derive(Debug, Default)]
pub struct ConfigurationIndexBuilder {
    index: ConfigurationIndex,
}

impl ConfigurationIndexBuilder {
    /// Declare that `candidate` provides `name`.
    ///
    /// A second declaration of the same package release for the same name is
    /// dropped; the first keeps its position. Returns whether the candidate
    /// was retained.
    pub fn declare(&mut self, name: &ExecutableName, candidate: InstallCandidate) -> bool {
        if !self.index.entries.contains_key(name.as_str()) {
            self.index.names.push(name.clone());
        }
        let candidates = self
            .index
            .entries
            .entry(name.as_str().to_string())
            .or_default();

        if candidates.iter().any(|c| c.same_release(&candidate)) {
            tracing::debug!(
                exe_name = %name,
                package = candidate.package(),
                version = candidate.version(),
                "Dropping duplicate declaration"
            );
            return false;
        }

        candidates.push(candidate);
        true
    }

    /// Chainable form of [`declare`](Self::declare) for tests and fixtures.
    #[must_use]
    pub fn with(mut self, name: &ExecutableName, candidate: InstallCandidate) -> Self {
        self.declare(name, candidate);
        self
    }

    pub fn build(self) -> ConfigurationIndex {
        self.index
    }
}

impl FromIterator<(ExecutableName, InstallCandidate)> for ConfigurationIndex {
    fn from_iter<I: IntoIterator<Item = (ExecutableName, InstallCandidate)>>(iter: I) -> Self {
        let mut builder = Self::builder();
        for (name, candidate) in iter {
            builder.declare(&name, candidate);
        }
        builder.build()
    }
}
