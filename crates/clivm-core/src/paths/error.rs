//! Errors locating the clivm root.

use thiserror::Error;

/// Why the clivm directories could not be determined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// `~` was used (or `CLIVM_ROOT_DIR` unset) but there is no home directory.
    #[error("no home directory to place ~/.clivm in; set CLIVM_ROOT_DIR")]
    NoHomeDir,

    /// A user-supplied directory was blank.
    #[error("directory path is empty")]
    EmptyPath,

    /// A relative directory could not be anchored at the working directory.
    #[error("working directory is unavailable: {0}")]
    CurrentDirError(String),
}
