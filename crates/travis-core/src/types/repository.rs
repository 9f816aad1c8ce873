//! Repository records as returned by the provider listing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric repository identifier assigned by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoId(pub u64);

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RepoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A repository entry from `GET /owner/{name}/repos`.
///
/// Only `id`, `slug` and `active` drive behaviour. The remaining fields are
/// carried for display and logging; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Provider identifier, used in every per-repository URL.
    pub id: RepoId,

    /// `owner/name` string.
    pub slug: String,

    /// Whether CI is currently enabled for this repository.
    #[serde(default)]
    pub active: bool,

    /// Repository name without the owner.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub private: Option<bool>,

    #[serde(default)]
    pub default_branch: Option<BranchRef>,

    #[serde(default)]
    pub owner: Option<OwnerRef>,

    /// Actions the token may perform on this repository.
    #[serde(rename = "@permissions", default)]
    pub permissions: Option<Permissions>,
}

impl RepositoryRecord {
    /// Minimal record, mostly useful for tests and fakes.
    pub fn new(id: u64, slug: impl Into<String>, active: bool) -> Self {
        Self {
            id: RepoId(id),
            slug: slug.into(),
            active,
            name: None,
            private: None,
            default_branch: None,
            owner: None,
            permissions: None,
        }
    }

    /// Returns false only when the provider explicitly reports that the
    /// token lacks the `activate` permission.
    pub fn can_activate(&self) -> bool {
        self.permissions
            .as_ref()
            .and_then(|p| p.activate)
            .unwrap_or(true)
    }
}

/// Minimal branch representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRef {
    pub name: String,
}

/// Minimal owner representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerRef {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
}

/// Subset of the `@permissions` block the tool cares about.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub activate: Option<bool>,
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub create_request: Option<bool>,
}

/// Response from `GET /user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    #[serde(default)]
    pub login: Option<String>,
}
