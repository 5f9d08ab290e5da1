//! Path utilities for clivm directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Read-only: nothing here creates directories

mod error;
mod platform;
mod resolver;

pub use error::PathError;
pub use platform::{
    DEFAULT_ROOT_DIR_RELATIVE, ROOT_DIR_ENV, normalize_user_path, pkgs_dir, root_dir, shim_dir,
};
pub use resolver::ResolvedPaths;

pub(crate) use platform::expand_home;
