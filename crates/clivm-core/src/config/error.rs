//! Configuration loading errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::paths::PathError;

/// Errors raised while reading, parsing or validating manifests.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The manifest file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or does not match the schema.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A package declaration is structurally valid but semantically wrong.
    #[error("Invalid package '{package}' in {path}: {reason}")]
    InvalidPackage {
        path: PathBuf,
        package: String,
        reason: String,
    },

    /// The clivm root directory could not be determined.
    #[error(transparent)]
    Path(#[from] PathError),
}
