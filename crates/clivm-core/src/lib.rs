//! Core resolution engine for clivm.
//!
//! Given a command name, find the absolute path that would be invoked:
//! packages declared in clivm manifests come first (first declaration wins),
//! then the ambient search path, scanned left to right.
//!
//! The crate is split into:
//! - [`domain`]: validated names and install candidates
//! - [`index`]: the in-memory configuration index
//! - [`resolver`]: the resolver, search path snapshot and probes
//! - [`config`]: manifest parsing, validation and discovery
//! - [`paths`]: clivm root, package store and shim directories

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod index;
pub mod paths;
pub mod resolver;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, ConfigSources};
pub use domain::{ExecutableName, InstallCandidate, NameError};
pub use index::{ConfigurationIndex, ConfigurationIndexBuilder};
pub use paths::{PathError, ResolvedPaths};
pub use resolver::{
    Attempt, AttemptOutcome, EnvProvider, FsProvider, Resolution, ResolutionSource, ResolveError,
    ResolveErrorKind, Resolver, SearchPathEntries, SystemEnv, SystemFs, resolve_command,
};
