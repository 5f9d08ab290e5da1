//! Locating manifest files for the current directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::manifest::{LoadedManifest, build_index, load_manifest};
use crate::index::ConfigurationIndex;
use crate::resolver::EnvProvider;

/// Manifest file names checked in each directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["clivm.toml", ".clivm.toml"];

/// PATH-like list of global manifests, consulted after project manifests.
pub const GLOBAL_CONFIG_ENV: &str = "CLIVM_GLOBAL_CONFIG";

/// Manifest files in effect for one request, highest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// Project manifests (nearest directory first) or the explicit file.
    pub project: Vec<PathBuf>,
    /// Global manifests from `CLIVM_GLOBAL_CONFIG`.
    pub global: Vec<PathBuf>,
}

impl ConfigSources {
    /// Collect sources for `start_dir`.
    ///
    /// An explicit file replaces project discovery; globals still apply.
    pub fn discover(start_dir: &Path, explicit: Option<&Path>, env: &dyn EnvProvider) -> Self {
        let project = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => discover_config_files(start_dir),
        };
        Self {
            project,
            global: global_config_files(env),
        }
    }

    /// All files in precedence order, each path at most once.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        self.project
            .iter()
            .chain(&self.global)
            .filter(|path| seen.insert((*path).clone()))
            .cloned()
            .collect()
    }

    /// Load every file and build the index.
    pub fn load_index(&self, root_dir: &Path) -> Result<ConfigurationIndex, ConfigError> {
        let manifests = self
            .files()
            .iter()
            .map(|path| load_manifest(path))
            .collect::<Result<Vec<LoadedManifest>, _>>()?;
        build_index(&manifests, root_dir)
    }
}

/// Walk from `start_dir` to the filesystem root collecting manifests.
///
/// At most one file per directory is taken; the nearest directory comes first.
pub fn discover_config_files(start_dir: &Path) -> Vec<PathBuf> {
    start_dir
        .ancestors()
        .filter_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|file_name| dir.join(file_name))
                .find(|candidate| candidate.is_file())
        })
        .collect()
}

/// Existing files listed in `CLIVM_GLOBAL_CONFIG`, in order.
pub fn global_config_files(env: &dyn EnvProvider) -> Vec<PathBuf> {
    let Some(value) = env.var_os(GLOBAL_CONFIG_ENV) else {
        return Vec::new();
    };

    std::env::split_paths(&value)
        .filter(|path| !path.as_os_str().is_empty())
        .filter(|path| {
            let exists = path.is_file();
            if !exists {
                tracing::debug!(path = %path.display(), "Skipping missing global config");
            }
            exists
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MockEnv;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    #[test]
    fn nearest_directory_comes_first() {
        let tmp = tempfile::tempdir().unwrap();
        let outer = tmp.path().join("clivm.toml");
        let inner = tmp.path().join("proj/.clivm.toml");
        touch(&outer);
        touch(&inner);
        let start = tmp.path().join("proj/src/deep");
        std::fs::create_dir_all(&start).unwrap();

        let files = discover_config_files(&start);

        let inner_pos = files.iter().position(|p| p == &inner).unwrap();
        let outer_pos = files.iter().position(|p| p == &outer).unwrap();
        assert!(inner_pos < outer_pos);
    }

    #[test]
    fn plain_name_preferred_over_dotfile() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("clivm.toml"));
        touch(&tmp.path().join(".clivm.toml"));

        let files = discover_config_files(tmp.path());

        assert_eq!(files.first(), Some(&tmp.path().join("clivm.toml")));
        assert!(!files.contains(&tmp.path().join(".clivm.toml")));
    }

    #[test]
    fn global_files_skip_missing_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let present = tmp.path().join("global.toml");
        touch(&present);
        let missing = tmp.path().join("missing.toml");
        let value = std::env::join_paths([&missing, &present]).unwrap();
        let env = MockEnv::new().with_var(GLOBAL_CONFIG_ENV, value);

        assert_eq!(global_config_files(&env), vec![present]);
    }

    #[test]
    fn explicit_file_replaces_project_discovery() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("clivm.toml"));
        let explicit = tmp.path().join("other.toml");

        let sources = ConfigSources::discover(tmp.path(), Some(&explicit), &MockEnv::new());

        assert_eq!(sources.project, vec![explicit]);
        assert!(sources.global.is_empty());
    }

    #[test]
    fn files_deduplicates_preserving_order() {
        let sources = ConfigSources {
            project: vec![PathBuf::from("/a/clivm.toml"), PathBuf::from("/g.toml")],
            global: vec![PathBuf::from("/g.toml"), PathBuf::from("/h.toml")],
        };
        assert_eq!(
            sources.files(),
            vec![
                PathBuf::from("/a/clivm.toml"),
                PathBuf::from("/g.toml"),
                PathBuf::from("/h.toml")
            ]
        );
    }

    #[test]
    fn load_index_reports_missing_explicit_file() {
        let tmp = tempfile::tempdir().unwrap();
        let sources = ConfigSources {
            project: vec![tmp.path().join("nope.toml")],
            global: Vec::new(),
        };
        let err = sources.load_index(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
