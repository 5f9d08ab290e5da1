//! Domain types for command resolution.
//!
//! These are pure data types: no filesystem access, no environment reads.
//! Everything here is constructed once per resolution request and never
//! mutated afterwards.

mod candidate;
mod name;

pub use candidate::InstallCandidate;
pub use name::{ExecutableName, NameError};
