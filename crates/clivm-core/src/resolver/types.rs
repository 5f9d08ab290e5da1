//! Types for command resolution results and failures.

use std::fmt;
use std::path::PathBuf;

use crate::domain::NameError;

/// Successful resolution of a command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Absolute path of the executable that would be invoked.
    pub path: PathBuf,
    /// Where the path came from.
    pub source: ResolutionSource,
    /// Every probe made on the way (for diagnostics).
    pub attempts: Vec<Attempt>,
}

/// Which source of truth produced a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A package declared in the configuration.
    Configured { package: String, version: String },
    /// A directory of the ambient search path.
    SearchPath { dir: PathBuf },
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured { package, version } => write!(f, "config: {package}@{version}"),
            Self::SearchPath { dir } => write!(f, "PATH: {}", dir.display()),
        }
    }
}

/// A single probe of a candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// The path that was checked.
    pub candidate: PathBuf,
    /// The outcome of checking this candidate.
    pub outcome: AttemptOutcome,
}

/// Possible outcomes when checking if a candidate path is a usable executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Regular file, executable by the current user.
    Ok,
    /// Configured candidate accepted without touching the filesystem.
    Trusted,
    /// Path does not exist.
    NotFound,
    /// Path exists but is not a regular file (e.g., directory).
    NotAFile,
    /// File exists but the current user may not execute it.
    NotExecutable,
    /// Permission denied when checking the path.
    PermissionDenied,
    /// Other I/O error occurred.
    IoError(String),
}

impl AttemptOutcome {
    /// Whether this outcome selects the candidate.
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Ok | Self::Trusted)
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Trusted => write!(f, "OK (configured)"),
            Self::NotFound => write!(f, "not found"),
            Self::NotAFile => write!(f, "not a file"),
            Self::NotExecutable => write!(f, "not executable"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

/// Coarse failure category exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorKind {
    InvalidInput,
    NotFound,
}

/// Error returned when a command cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The request was malformed; nothing was looked up.
    #[error("invalid command name '{name}': {reason}")]
    InvalidInput { name: String, reason: NameError },

    /// Neither the configuration nor the search path provides the command.
    #[error("command is not found: {name}")]
    NotFound { name: String, attempts: Vec<Attempt> },
}

impl ResolveError {
    pub const fn kind(&self) -> ResolveErrorKind {
        match self {
            Self::InvalidInput { .. } => ResolveErrorKind::InvalidInput,
            Self::NotFound { .. } => ResolveErrorKind::NotFound,
        }
    }

    /// The requested name, exactly as the caller passed it.
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidInput { name, .. } | Self::NotFound { name, .. } => name,
        }
    }

    /// Probes made before giving up (empty for `InvalidInput`).
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            Self::InvalidInput { .. } => &[],
            Self::NotFound { attempts, .. } => attempts,
        }
    }

    /// Multi-line listing of the failed probes.
    pub fn tried_report(&self) -> String {
        let attempts = self.attempts();
        if attempts.is_empty() {
            return "  (no candidates checked)".to_string();
        }
        attempts
            .iter()
            .map(|a| format!("  ✗ {}: {}", a.candidate.display(), a.outcome))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_command() {
        let err = ResolveError::NotFound {
            name: "foo".to_string(),
            attempts: Vec::new(),
        };
        assert_eq!(err.to_string(), "command is not found: foo");
        assert_eq!(err.kind(), ResolveErrorKind::NotFound);
        assert_eq!(err.name(), "foo");
        assert_eq!(err.tried_report(), "  (no candidates checked)");
    }

    #[test]
    fn tried_report_lists_each_probe() {
        let err = ResolveError::NotFound {
            name: "foo".to_string(),
            attempts: vec![
                Attempt {
                    candidate: PathBuf::from("/usr/local/bin/foo"),
                    outcome: AttemptOutcome::NotFound,
                },
                Attempt {
                    candidate: PathBuf::from("/bin/foo"),
                    outcome: AttemptOutcome::NotExecutable,
                },
            ],
        };
        let report = err.tried_report();
        assert!(report.contains("/usr/local/bin/foo: not found"));
        assert!(report.contains("/bin/foo: not executable"));
    }

    #[test]
    fn invalid_input_carries_reason() {
        let err = ResolveError::InvalidInput {
            name: String::new(),
            reason: NameError::Empty,
        };
        assert_eq!(err.kind(), ResolveErrorKind::InvalidInput);
        assert!(err.to_string().contains("empty"));
        assert!(err.attempts().is_empty());
    }
}
