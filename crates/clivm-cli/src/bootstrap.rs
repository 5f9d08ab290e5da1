//! CLI bootstrap - the composition root.
//!
//! Every concrete input of a resolution is captured here once per process:
//! the clivm directories, the working directory, the manifests in effect and
//! the search path. Handlers only see the assembled [`CliContext`].

use std::path::{Path, PathBuf};

use clivm_core::{
    ConfigSources, ConfigurationIndex, ResolvedPaths, Resolver, SearchPathEntries, SystemEnv,
};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Explicit manifest from `--config`, replacing discovery.
    pub config_file: Option<PathBuf>,
    /// Directory discovery starts from and relative PATH entries resolve against.
    pub working_dir: PathBuf,
}

impl CliConfig {
    /// Config rooted at the process working directory.
    pub fn with_defaults(config_file: Option<PathBuf>) -> Result<Self, CliError> {
        Ok(Self {
            config_file,
            working_dir: std::env::current_dir()?,
        })
    }
}

/// Fully composed context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// clivm root, package store and shim directories.
    pub paths: ResolvedPaths,
    /// Manifests in effect for this invocation.
    pub sources: ConfigSources,
    /// Working directory captured at startup.
    pub working_dir: PathBuf,
}

impl CliContext {
    /// Load every manifest in effect into an index.
    pub fn load_index(&self) -> Result<ConfigurationIndex, CliError> {
        let index = self.sources.load_index(&self.paths.root_dir)?;
        tracing::debug!(executables = index.len(), "Loaded configuration index");
        Ok(index)
    }

    /// Snapshot of `PATH` without the clivm shim directory.
    pub fn search_path(&self) -> SearchPathEntries {
        SearchPathEntries::capture(&SystemEnv, Some(&self.working_dir))
            .without(&self.paths.shim_dir)
    }

    /// Resolver over the loaded manifests and the current search path.
    pub fn resolver(&self, strict: bool) -> Result<Resolver, CliError> {
        Ok(Resolver::new(self.load_index()?, self.search_path()).strict(strict))
    }
}

/// Wire the CLI context from `config`.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let paths = ResolvedPaths::resolve()?;
    let explicit = config
        .config_file
        .as_deref()
        .map(|file| absolute_from(&config.working_dir, file));
    let sources = ConfigSources::discover(&config.working_dir, explicit.as_deref(), &SystemEnv);

    tracing::debug!(
        root_dir = %paths.root_dir.display(),
        config_files = sources.files().len(),
        "Bootstrapped CLI context"
    );

    Ok(CliContext {
        paths,
        sources,
        working_dir: config.working_dir,
    })
}

fn absolute_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
