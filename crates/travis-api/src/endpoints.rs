//! Travis CI endpoint paths and error payloads.

use serde::Deserialize;

use travis_core::RepoId;

/// GET: the authenticated user.
pub const USER: &str = "/user";

/// POST: resync a user's repositories from GitHub.
pub fn user_sync(user_id: u64) -> String {
    format!("/user/{}/sync", user_id)
}

/// Whether `owner` can be placed into a path as-is.
pub fn is_owner_segment(owner: &str) -> bool {
    !owner.is_empty()
        && !owner
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
}

/// GET: repositories owned by a user or organization.
///
/// `owner` must pass [`is_owner_segment`].
pub fn owner_repos(owner: &str) -> String {
    format!("/owner/{}/repos", owner)
}

/// POST: enable CI for a repository.
pub fn repo_activate(repo: RepoId) -> String {
    format!("/repo/{}/activate", repo)
}

/// PATCH (legacy v2): repository build settings. Note the plural `repos`.
pub fn repo_settings(repo: RepoId) -> String {
    format!("/repos/{}/settings", repo)
}

/// POST: trigger a build.
pub fn repo_requests(repo: RepoId) -> String {
    format!("/repo/{}/requests", repo)
}

/// Query for listing endpoints.
#[derive(Debug, serde::Serialize)]
pub struct ListQuery {
    pub limit: u32,
    pub offset: u32,
}

/// Error body returned by the v3 API.
///
/// ```json
/// {"@type": "error", "error_type": "not_found", "error_message": "repository not found"}
/// ```
#[derive(Debug, Deserialize)]
pub struct TravisErrorResponse {
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}
