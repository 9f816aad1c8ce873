//! CI provider trait.

use async_trait::async_trait;

use crate::Result;
use crate::payload::{BuildRequest, SettingsPolicy};
use crate::types::{Page, PageCursor, RepoId, UserInfo};

/// The calls the activation run makes against a CI provider.
///
/// Every method is a single request. Implementations never retry.
#[async_trait]
pub trait CiProvider: Send + Sync {
    /// Fetch the user the token belongs to.
    async fn current_user(&self) -> Result<UserInfo>;

    /// Ask the provider to resynchronize the user's repositories from
    /// GitHub. Returns once the request is accepted; the sync itself runs
    /// asynchronously on the provider side.
    async fn sync_user(&self, user_id: u64) -> Result<()>;

    /// Fetch one page of an owner's repositories.
    async fn list_repositories(&self, owner: &str, cursor: PageCursor) -> Result<Page>;

    /// Enable CI for a repository.
    async fn activate(&self, repo: RepoId, request: &BuildRequest) -> Result<()>;

    /// Apply build settings to a repository.
    async fn update_settings(&self, repo: RepoId, policy: &SettingsPolicy) -> Result<()>;

    /// Trigger a build. Rate limited by the provider.
    async fn request_build(&self, repo: RepoId, request: &BuildRequest) -> Result<()>;
}
