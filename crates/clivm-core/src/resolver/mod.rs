//! Command name resolution.
//!
//! Maps a bare command name to the absolute path that would be invoked,
//! consulting configured packages before the ambient search path.
//!
//! ## Architecture
//!
//! The resolver is split into small, focused modules:
//! - `types`: result and error types (`Resolution`, `Attempt`, `ResolveError`)
//! - `env`: environment variable access trait (injectable for testing)
//! - `fs`: filesystem probe trait (injectable for testing)
//! - `search_path`: immutable snapshot of the search directories
//! - `resolve`: the two-stage lookup itself
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clivm_core::{ConfigurationIndex, Resolver, SearchPathEntries};
//!
//! let resolver = Resolver::new(ConfigurationIndex::empty(), SearchPathEntries::from_env());
//! let resolved = resolver.resolve("ls").unwrap();
//! println!("{}", resolved.path.display());
//!
//! for attempt in &resolved.attempts {
//!     println!("  {} - {}", attempt.candidate.display(), attempt.outcome);
//! }
//! ```

mod env;
mod fs;
mod resolve;
mod search_path;
mod types;

pub use env::{EnvProvider, SystemEnv};
pub use fs::{FsProvider, SystemFs};
pub use resolve::{Resolver, resolve_command};
pub use search_path::SearchPathEntries;
pub use types::{
    Attempt, AttemptOutcome, Resolution, ResolutionSource, ResolveError, ResolveErrorKind,
};

#[cfg(test)]
pub use env::MockEnv;
#[cfg(test)]
pub use fs::MockFs;
