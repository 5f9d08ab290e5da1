//! Manifest schema and conversion into a [`ConfigurationIndex`].
//!
//! ```toml
//! [[packages]]
//! name = "cli/cli"
//! version = "v2.4.0"
//! install_root = "/opt/tools/gh/2.4.0"   # optional
//!
//! [[packages.files]]
//! name = "gh"
//! src = "bin/gh"
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use super::error::ConfigError;
use crate::domain::{ExecutableName, InstallCandidate};
use crate::index::ConfigurationIndex;
use crate::paths::{expand_home, pkgs_dir};

/// One manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub packages: Vec<PackageDecl>,
}

/// A package release providing one or more executables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageDecl {
    pub name: String,
    pub version: String,
    /// Absolute install location; defaults to `<root>/pkgs/<name>/<version>`.
    #[serde(default)]
    pub install_root: Option<String>,
    /// Executables provided; defaults to one named after the package.
    #[serde(default)]
    pub files: Vec<FileDecl>,
}

/// An executable inside a package.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileDecl {
    pub name: String,
    /// Path relative to the install root; defaults to `name`.
    #[serde(default)]
    pub src: Option<String>,
}

/// A parsed manifest together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub manifest: Manifest,
}

/// Read and parse one manifest file.
pub fn load_manifest(path: &Path) -> Result<LoadedManifest, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(path, &contents)
}

/// Parse manifest text; `path` is only used for error reporting.
pub fn parse_manifest(path: &Path, contents: &str) -> Result<LoadedManifest, ConfigError> {
    let manifest = toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedManifest {
        path: path.to_path_buf(),
        manifest,
    })
}

/// Build the index from manifests in precedence order.
///
/// Declaration order is manifest order, then package order, then file order,
/// so the first manifest's packages win ties.
pub fn build_index(
    manifests: &[LoadedManifest],
    root_dir: &Path,
) -> Result<ConfigurationIndex, ConfigError> {
    let mut builder = ConfigurationIndex::builder();

    for loaded in manifests {
        for package in &loaded.manifest.packages {
            let invalid = |reason: String| ConfigError::InvalidPackage {
                path: loaded.path.clone(),
                package: package.name.clone(),
                reason,
            };

            validate_identity(package).map_err(invalid)?;
            let install_root = install_root(package, root_dir).map_err(invalid)?;

            for (name, src) in package_files(package).map_err(invalid)? {
                let candidate = InstallCandidate::new(
                    package.name.as_str(),
                    package.version.as_str(),
                    install_root.clone(),
                    src,
                );
                builder.declare(&name, candidate);
            }
        }
        tracing::debug!(
            path = %loaded.path.display(),
            packages = loaded.manifest.packages.len(),
            "Indexed config file"
        );
    }

    Ok(builder.build())
}

fn validate_identity(package: &PackageDecl) -> Result<(), String> {
    if package.name.trim().is_empty() {
        return Err("package name is empty".to_string());
    }
    if package.version.trim().is_empty() {
        return Err("version is empty".to_string());
    }
    if !is_contained_relative(Path::new(&package.name)) {
        return Err("package name must be a relative path without '..'".to_string());
    }
    if package.version.chars().any(std::path::is_separator) || package.version == ".." {
        return Err(format!("version '{}' is not a single path segment", package.version));
    }
    Ok(())
}

fn install_root(package: &PackageDecl, root_dir: &Path) -> Result<PathBuf, String> {
    match &package.install_root {
        Some(raw) => {
            let path = expand_home(raw.trim()).map_err(|e| e.to_string())?;
            if path.is_absolute() {
                Ok(path)
            } else {
                Err(format!("install_root '{raw}' must be absolute"))
            }
        }
        None => Ok(pkgs_dir(root_dir)
            .join(&package.name)
            .join(&package.version)),
    }
}

/// Executables declared by `package`, with their paths under the install root.
fn package_files(package: &PackageDecl) -> Result<Vec<(ExecutableName, PathBuf)>, String> {
    if package.files.is_empty() {
        let default_name = package
            .name
            .rsplit('/')
            .next()
            .unwrap_or(package.name.as_str());
        let name = ExecutableName::parse(default_name)
            .map_err(|e| format!("cannot derive a command name: {e}"))?;
        let src = PathBuf::from(name.as_str());
        return Ok(vec![(name, src)]);
    }

    package
        .files
        .iter()
        .map(|file| {
            let name = ExecutableName::parse(&file.name)
                .map_err(|e| format!("file '{}': {e}", file.name))?;
            let src = PathBuf::from(file.src.as_deref().unwrap_or(&file.name));
            if !is_contained_relative(&src) {
                return Err(format!(
                    "file '{}': src '{}' must be relative and stay inside the install root",
                    file.name,
                    src.display()
                ));
            }
            Ok((name, src))
        })
        .collect()
}

/// Relative, non-empty, and free of `..` components.
fn is_contained_relative(path: &Path) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some()
        && components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
