//! Manifest loading and discovery.
//!
//! Turns TOML manifests into the validated [`ConfigurationIndex`] the
//! resolver consumes. Declaration order across files is significant: it is
//! the tie-break order for executables provided by several packages.
//!
//! [`ConfigurationIndex`]: crate::ConfigurationIndex

mod discover;
mod error;
mod manifest;

pub use discover::{
    CONFIG_FILE_NAMES, ConfigSources, GLOBAL_CONFIG_ENV, discover_config_files,
    global_config_files,
};
pub use error::ConfigError;
pub use manifest::{
    FileDecl, LoadedManifest, Manifest, PackageDecl, build_index, load_manifest, parse_manifest,
};
