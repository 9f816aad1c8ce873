//! Fixed request bodies sent to the provider.

use serde::{Deserialize, Serialize};

/// Branch built when none is configured.
pub const DEFAULT_BRANCH: &str = "master";

/// Build settings applied to every newly activated repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPolicy {
    /// Only build when a `.travis.yml` is present.
    pub builds_only_with_travis_yml: bool,
    pub build_pushes: bool,
    pub build_pull_requests: bool,
    /// Cap on concurrent builds.
    pub maximum_number_of_builds: u32,
}

impl Default for SettingsPolicy {
    fn default() -> Self {
        Self {
            builds_only_with_travis_yml: true,
            build_pushes: true,
            build_pull_requests: true,
            maximum_number_of_builds: 1,
        }
    }
}

/// Wire envelope for the legacy settings endpoint: `{"settings": {...}}`.
#[derive(Debug, Serialize)]
pub struct SettingsUpdate<'a> {
    pub settings: &'a SettingsPolicy,
}

impl<'a> From<&'a SettingsPolicy> for SettingsUpdate<'a> {
    fn from(settings: &'a SettingsPolicy) -> Self {
        Self { settings }
    }
}

/// Body for activation and build-request calls: `{"request": {"branch": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub request: BranchTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchTarget {
    pub branch: String,
}

impl BuildRequest {
    pub fn for_branch(branch: impl Into<String>) -> Self {
        Self {
            request: BranchTarget {
                branch: branch.into(),
            },
        }
    }

    pub fn branch(&self) -> &str {
        &self.request.branch
    }
}

impl Default for BuildRequest {
    fn default() -> Self {
        Self::for_branch(DEFAULT_BRANCH)
    }
}
