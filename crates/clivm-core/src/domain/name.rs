//! Validated executable names.

use std::fmt;
use std::path::is_separator;

use thiserror::Error;

/// Reasons a requested command name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name is the empty string.
    #[error("command name is empty")]
    Empty,

    /// The name contains a path separator, so it denotes a path.
    #[error("command name must not contain a path separator")]
    ContainsSeparator,

    /// The name contains a NUL byte and can never name a file.
    #[error("command name must not contain a NUL byte")]
    ContainsNul,

    /// `.` and `..` name directories, not executables.
    #[error("'{0}' is not a command name")]
    Reserved(String),
}

/// A bare command name such as `gh`.
///
/// Guaranteed non-empty and free of path separators, so joining it onto a
/// directory always yields a direct child of that directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExecutableName(String);

impl ExecutableName {
    /// Validate a raw command name.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        if raw.is_empty() {
            return Err(NameError::Empty);
        }
        if raw.chars().any(is_separator) {
            return Err(NameError::ContainsSeparator);
        }
        if raw.contains('\0') {
            return Err(NameError::ContainsNul);
        }
        if raw == "." || raw == ".." {
            return Err(NameError::Reserved(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExecutableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ExecutableName {
    type Error = NameError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}
