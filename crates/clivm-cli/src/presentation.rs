//! Serializable views of resolution results for `--json` output.

use serde::{Deserialize, Serialize};

use clivm_core::{Attempt, Resolution, ResolutionSource, ResolveError, ResolveErrorKind};

/// Outcome of `clivm which`, stable across releases.
///
/// Paths are rendered as strings so the JSON stays portable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolutionStatus {
    /// Whether resolution succeeded.
    pub success: bool,

    /// The requested command name.
    pub name: String,

    /// The resolved absolute path (if successful).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_path: Option<String>,

    /// Where the path came from (if successful).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceView>,

    /// All probes made during resolution.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attempts: Vec<ResolutionAttempt>,

    /// `invalid_input` or `not_found` (if resolution failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,

    /// Error message (if resolution failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Source of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceView {
    Configured { package: String, version: String },
    SearchPath { dir: String },
}

/// A single probe for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolutionAttempt {
    pub candidate: String,
    pub outcome: String,
}

impl ResolutionStatus {
    pub fn resolved(name: &str, resolution: &Resolution) -> Self {
        Self {
            success: true,
            name: name.to_string(),
            resolved_path: Some(resolution.path.display().to_string()),
            source: Some(SourceView::from(&resolution.source)),
            attempts: attempts(&resolution.attempts),
            error_kind: None,
            error_message: None,
        }
    }

    pub fn failed(err: &ResolveError) -> Self {
        let kind = match err.kind() {
            ResolveErrorKind::InvalidInput => "invalid_input",
            ResolveErrorKind::NotFound => "not_found",
        };
        Self {
            success: false,
            name: err.name().to_string(),
            resolved_path: None,
            source: None,
            attempts: attempts(err.attempts()),
            error_kind: Some(kind.to_string()),
            error_message: Some(err.to_string()),
        }
    }
}

impl From<&ResolutionSource> for SourceView {
    fn from(source: &ResolutionSource) -> Self {
        match source {
            ResolutionSource::Configured { package, version } => Self::Configured {
                package: package.clone(),
                version: version.clone(),
            },
            ResolutionSource::SearchPath { dir } => Self::SearchPath {
                dir: dir.display().to_string(),
            },
        }
    }
}

fn attempts(attempts: &[Attempt]) -> Vec<ResolutionAttempt> {
    attempts
        .iter()
        .map(|a| ResolutionAttempt {
            candidate: a.candidate.display().to_string(),
            outcome: a.outcome.to_string(),
        })
        .collect()
}
