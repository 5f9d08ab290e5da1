//! Main command resolution logic.

use std::path::{Path, PathBuf};

use super::fs::{FsProvider, SystemFs};
use super::search_path::SearchPathEntries;
use super::types::{Attempt, AttemptOutcome, Resolution, ResolutionSource, ResolveError};
use crate::domain::{ExecutableName, InstallCandidate};
use crate::index::ConfigurationIndex;

/// Resolves command names against configured packages, then the search path.
///
/// A resolver owns immutable snapshots of both sources, so `resolve` takes
/// `&self` and may be called from many threads at once.
#[derive(Debug, Clone)]
pub struct Resolver<F = SystemFs> {
    index: ConfigurationIndex,
    search_path: SearchPathEntries,
    fs: F,
    strict: bool,
}

impl Resolver<SystemFs> {
    /// Resolver probing the real filesystem.
    pub fn new(index: ConfigurationIndex, search_path: SearchPathEntries) -> Self {
        Self::with_fs(index, search_path, SystemFs)
    }
}

impl<F: FsProvider> Resolver<F> {
    /// Resolver with an injected filesystem provider (for testing).
    pub fn with_fs(index: ConfigurationIndex, search_path: SearchPathEntries, fs: F) -> Self {
        Self {
            index,
            search_path,
            fs,
            strict: false,
        }
    }

    /// In strict mode configured binaries must exist and be executable;
    /// candidates that fail the probe are skipped.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    pub const fn index(&self) -> &ConfigurationIndex {
        &self.index
    }

    pub const fn search_path(&self) -> &SearchPathEntries {
        &self.search_path
    }

    /// Resolve `name` to the absolute path that would be invoked.
    ///
    /// Order:
    /// 1. Configured candidates, first declared wins
    /// 2. Search path directories, left to right
    pub fn resolve(&self, name: &str) -> Result<Resolution, ResolveError> {
        let exe_name = ExecutableName::parse(name).map_err(|reason| ResolveError::InvalidInput {
            name: name.to_string(),
            reason,
        })?;

        let mut attempts = Vec::new();

        if let Some(resolution) = self.resolve_configured(&exe_name, &mut attempts) {
            return Ok(resolution);
        }

        if let Some(resolution) = self.search(&exe_name, &mut attempts) {
            return Ok(resolution);
        }

        tracing::debug!(exe_name = %exe_name, probes = attempts.len(), "Command not found");
        Err(ResolveError::NotFound {
            name: name.to_string(),
            attempts,
        })
    }

    /// Stage 1: pick a configured candidate.
    fn resolve_configured(
        &self,
        name: &ExecutableName,
        attempts: &mut Vec<Attempt>,
    ) -> Option<Resolution> {
        let candidates = self.index.lookup(name.as_str());
        if candidates.is_empty() {
            return None;
        }
        if candidates.len() > 1 {
            tracing::debug!(
                exe_name = %name,
                count = candidates.len(),
                package = candidates[0].package(),
                version = candidates[0].version(),
                "Multiple configured candidates, using the first declared"
            );
        }

        for candidate in candidates {
            let path = candidate.executable_path();
            let outcome = if self.strict {
                self.fs.check_executable(&path)
            } else {
                AttemptOutcome::Trusted
            };
            let matched = outcome.is_match();
            attempts.push(Attempt {
                candidate: path.clone(),
                outcome,
            });

            if matched {
                tracing::debug!(
                    exe_name = %name,
                    path = %path.display(),
                    "Resolved from configuration"
                );
                return Some(Resolution {
                    path,
                    source: configured_source(candidate),
                    attempts: std::mem::take(attempts),
                });
            }
        }

        tracing::debug!(
            exe_name = %name,
            "No configured candidate passed the strict check, falling back to PATH"
        );
        None
    }

    /// Stage 2: first executable regular file along the search path.
    fn search(&self, name: &ExecutableName, attempts: &mut Vec<Attempt>) -> Option<Resolution> {
        let file_names = self.search_path.file_names(name.as_str());

        for dir in self.search_path.dirs() {
            for file_name in &file_names {
                let candidate = dir.join(file_name);
                let outcome = self.fs.check_executable(&candidate);
                let matched = outcome.is_match();
                attempts.push(Attempt {
                    candidate: candidate.clone(),
                    outcome,
                });

                if matched {
                    let path = absolute(candidate);
                    tracing::debug!(
                        exe_name = %name,
                        path = %path.display(),
                        "Resolved from PATH"
                    );
                    return Some(Resolution {
                        path,
                        source: ResolutionSource::SearchPath { dir: dir.clone() },
                        attempts: std::mem::take(attempts),
                    });
                }
            }
        }

        None
    }
}

fn configured_source(candidate: &InstallCandidate) -> ResolutionSource {
    ResolutionSource::Configured {
        package: candidate.package().to_string(),
        version: candidate.version().to_string(),
    }
}

/// Snapshot entries are already absolute; this only matters for entries a
/// caller passed in relative form.
fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    std::path::absolute(&path).unwrap_or(path)
}

/// Convenience for one-off lookups against the live environment.
pub fn resolve_command(
    name: &str,
    index: ConfigurationIndex,
    exclude_dir: Option<&Path>,
) -> Result<Resolution, ResolveError> {
    let mut search_path = SearchPathEntries::from_env();
    if let Some(dir) = exclude_dir {
        search_path = search_path.without(dir);
    }
    Resolver::new(index, search_path).resolve(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::fs::MockFs;
    use crate::resolver::types::ResolveErrorKind;

    fn name(raw: &str) -> ExecutableName {
        ExecutableName::parse(raw).unwrap()
    }

    fn gh_index() -> ConfigurationIndex {
        ConfigurationIndex::builder()
            .with(
                &name("gh"),
                InstallCandidate::new("cli/cli", "v2.4.0", "/home/u/.tools/gh/2.4.0", "bin/gh"),
            )
            .build()
    }

    fn system_path() -> SearchPathEntries {
        SearchPathEntries::new(["/usr/local/bin", "/bin"])
    }

    #[test]
    fn single_candidate_is_returned_verbatim() {
        let resolver = Resolver::with_fs(gh_index(), system_path(), MockFs::new());

        let resolved = resolver.resolve("gh").unwrap();

        assert_eq!(resolved.path, PathBuf::from("/home/u/.tools/gh/2.4.0/bin/gh"));
        assert_eq!(
            resolved.source,
            ResolutionSource::Configured {
                package: "cli/cli".to_string(),
                version: "v2.4.0".to_string()
            }
        );
    }

    #[test]
    fn configured_candidate_is_not_probed_by_default() {
        // MockFs knows nothing about the install root.
        let resolver = Resolver::with_fs(gh_index(), system_path(), MockFs::new());
        let resolved = resolver.resolve("gh").unwrap();
        assert_eq!(resolved.attempts.len(), 1);
        assert_eq!(resolved.attempts[0].outcome, AttemptOutcome::Trusted);
    }

    #[test]
    fn first_declared_candidate_wins_over_newer_version() {
        let index = ConfigurationIndex::builder()
            .with(
                &name("gh"),
                InstallCandidate::new("cli/cli", "v2.4.0", "/tools/gh/2.4.0", "bin/gh"),
            )
            .with(
                &name("gh"),
                InstallCandidate::new("cli/cli", "v9.9.9", "/tools/gh/9.9.9", "bin/gh"),
            )
            .build();
        let fs = MockFs::new().with_executable("/bin/gh");
        let resolver = Resolver::with_fs(index, system_path(), fs);

        for _ in 0..3 {
            let resolved = resolver.resolve("gh").unwrap();
            assert_eq!(resolved.path, PathBuf::from("/tools/gh/2.4.0/bin/gh"));
        }
    }

    #[test]
    fn configuration_takes_precedence_over_path() {
        let fs = MockFs::new().with_executable("/usr/local/bin/gh");
        let resolver = Resolver::with_fs(gh_index(), system_path(), fs);
        let resolved = resolver.resolve("gh").unwrap();
        assert!(matches!(resolved.source, ResolutionSource::Configured { .. }));
    }

    #[test]
    fn falls_back_to_path() {
        let fs = MockFs::new().with_executable("/bin/ls");
        let resolver = Resolver::with_fs(ConfigurationIndex::empty(), system_path(), fs);

        let resolved = resolver.resolve("ls").unwrap();

        assert_eq!(resolved.path, PathBuf::from("/bin/ls"));
        assert_eq!(
            resolved.source,
            ResolutionSource::SearchPath {
                dir: PathBuf::from("/bin")
            }
        );
        assert_eq!(resolved.attempts.len(), 2);
        assert_eq!(resolved.attempts[0].outcome, AttemptOutcome::NotFound);
    }

    #[test]
    fn earlier_path_entry_wins() {
        let fs = MockFs::new()
            .with_executable("/usr/local/bin/ls")
            .with_executable("/bin/ls");
        let resolver = Resolver::with_fs(ConfigurationIndex::empty(), system_path(), fs);
        assert_eq!(
            resolver.resolve("ls").unwrap().path,
            PathBuf::from("/usr/local/bin/ls")
        );
    }

    #[test]
    fn skips_unusable_entries() {
        let search_path = SearchPathEntries::new(["/a", "/b", "/c", "/d"]);
        let fs = MockFs::new()
            .with_non_executable("/a/tool")
            .with_directory("/b/tool")
            .with_denied("/c/tool")
            .with_executable("/d/tool");
        let resolver = Resolver::with_fs(ConfigurationIndex::empty(), search_path, fs);

        let resolved = resolver.resolve("tool").unwrap();

        assert_eq!(resolved.path, PathBuf::from("/d/tool"));
        let outcomes: Vec<_> = resolved.attempts.iter().map(|a| a.outcome.clone()).collect();
        assert_eq!(
            outcomes,
            vec![
                AttemptOutcome::NotExecutable,
                AttemptOutcome::NotAFile,
                AttemptOutcome::PermissionDenied,
                AttemptOutcome::Ok
            ]
        );
    }

    #[test]
    fn not_found_carries_original_name() {
        let resolver =
            Resolver::with_fs(ConfigurationIndex::empty(), system_path(), MockFs::new());

        let err = resolver.resolve("foo").unwrap_err();

        assert_eq!(err.kind(), ResolveErrorKind::NotFound);
        assert_eq!(err.name(), "foo");
        assert_eq!(err.attempts().len(), 2);
    }

    #[test]
    fn empty_name_is_invalid_input() {
        let resolver = Resolver::with_fs(gh_index(), system_path(), MockFs::new());
        let err = resolver.resolve("").unwrap_err();
        assert_eq!(err.kind(), ResolveErrorKind::InvalidInput);
        assert_eq!(err.name(), "");
    }

    #[test]
    fn path_like_name_is_invalid_input() {
        let fs = MockFs::new().with_executable("/bin/ls");
        let resolver = Resolver::with_fs(ConfigurationIndex::empty(), system_path(), fs);
        let err = resolver.resolve("/bin/ls").unwrap_err();
        assert_eq!(err.kind(), ResolveErrorKind::InvalidInput);
        assert_eq!(err.name(), "/bin/ls");
    }

    #[test]
    fn strict_mode_skips_missing_configured_binary() {
        let index = ConfigurationIndex::builder()
            .with(
                &name("gh"),
                InstallCandidate::new("cli/cli", "v2.5.0", "/tools/gh/2.5.0", "bin/gh"),
            )
            .with(
                &name("gh"),
                InstallCandidate::new("cli/cli", "v2.4.0", "/tools/gh/2.4.0", "bin/gh"),
            )
            .build();
        let fs = MockFs::new().with_executable("/tools/gh/2.4.0/bin/gh");
        let resolver = Resolver::with_fs(index, system_path(), fs).strict(true);

        let resolved = resolver.resolve("gh").unwrap();

        assert_eq!(resolved.path, PathBuf::from("/tools/gh/2.4.0/bin/gh"));
        assert_eq!(resolved.attempts[0].outcome, AttemptOutcome::NotFound);
    }

    #[test]
    fn strict_mode_falls_through_to_path() {
        let fs = MockFs::new().with_executable("/bin/gh");
        let resolver = Resolver::with_fs(gh_index(), system_path(), fs).strict(true);

        let resolved = resolver.resolve("gh").unwrap();

        assert_eq!(resolved.path, PathBuf::from("/bin/gh"));
        assert!(matches!(resolved.source, ResolutionSource::SearchPath { .. }));
    }

    #[test]
    fn tries_extensions_after_bare_name() {
        let search_path = SearchPathEntries::new(["/win/bin"]).with_extensions([".EXE"]);
        let fs = MockFs::new().with_executable("/win/bin/gh.EXE");
        let resolver = Resolver::with_fs(ConfigurationIndex::empty(), search_path, fs);

        let resolved = resolver.resolve("gh").unwrap();

        assert_eq!(resolved.path, PathBuf::from("/win/bin/gh.EXE"));
        assert_eq!(resolved.attempts.len(), 2);
    }

    #[test]
    fn concurrent_calls_agree() {
        let fs = MockFs::new()
            .with_executable("/usr/local/bin/jq")
            .with_executable("/bin/jq");
        let resolver = Resolver::with_fs(gh_index(), system_path(), fs);
        let expected_gh = resolver.resolve("gh").unwrap();
        let expected_jq = resolver.resolve("jq").unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        (
                            resolver.resolve("gh").unwrap(),
                            resolver.resolve("jq").unwrap(),
                            resolver.resolve("nope").unwrap_err(),
                        )
                    })
                })
                .collect();

            for handle in handles {
                let (gh, jq, missing) = handle.join().unwrap();
                assert_eq!(gh, expected_gh);
                assert_eq!(jq, expected_jq);
                assert_eq!(missing.name(), "nope");
            }
        });
    }
}
