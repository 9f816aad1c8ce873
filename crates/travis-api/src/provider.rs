//! [`CiProvider`] over the Travis CI REST API.

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};

use travis_core::error::InvalidInputError;
use travis_core::payload::SettingsUpdate;
use travis_core::{
    ApiToken, ApiUrl, BuildRequest, CiProvider, Page, PageCursor, RepoId, Result,
    SettingsPolicy, UserInfo,
};

use crate::client::{ApiVersion, TravisClient};
use crate::endpoints::{self, ListQuery};

/// A network-backed provider.
#[derive(Debug, Clone)]
pub struct TravisApi {
    client: TravisClient,
}

impl TravisApi {
    /// Create a provider for the given base URL and token.
    pub fn new(api: ApiUrl, token: &ApiToken, user_agent: &str) -> Result<Self> {
        debug!(host = api.host(), user_agent, "Creating Travis provider");
        Ok(Self {
            client: TravisClient::new(api, token, user_agent)?,
        })
    }

    /// Returns the API URL for this instance.
    pub fn url(&self) -> &ApiUrl {
        self.client.api()
    }
}

#[async_trait]
impl CiProvider for TravisApi {
    #[instrument(skip(self))]
    async fn current_user(&self) -> Result<UserInfo> {
        debug!("Fetching current user");
        self.client.get::<(), _>(endpoints::USER, None).await
    }

    #[instrument(skip(self))]
    async fn sync_user(&self, user_id: u64) -> Result<()> {
        debug!("Requesting sync");
        self.client
            .send::<()>(
                Method::POST,
                &endpoints::user_sync(user_id),
                None,
                ApiVersion::V3,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn list_repositories(&self, owner: &str, cursor: PageCursor) -> Result<Page> {
        if !endpoints::is_owner_segment(owner) {
            return Err(InvalidInputError::Owner {
                value: owner.to_string(),
                reason: "must be a single non-empty path segment without '?', '#' or '%'"
                    .to_string(),
            }
            .into());
        }

        debug!(limit = cursor.limit, offset = cursor.offset, "Listing repositories");
        let query = ListQuery {
            limit: cursor.limit,
            offset: cursor.offset,
        };
        self.client
            .get(&endpoints::owner_repos(owner), Some(&query))
            .await
    }

    #[instrument(skip(self, request), fields(branch = request.branch()))]
    async fn activate(&self, repo: RepoId, request: &BuildRequest) -> Result<()> {
        debug!("Activating repository");
        self.client
            .send(
                Method::POST,
                &endpoints::repo_activate(repo),
                Some(request),
                ApiVersion::V3,
            )
            .await
    }

    #[instrument(skip(self, policy))]
    async fn update_settings(&self, repo: RepoId, policy: &SettingsPolicy) -> Result<()> {
        debug!(?policy, "Updating settings");
        self.client
            .send(
                Method::PATCH,
                &endpoints::repo_settings(repo),
                Some(&SettingsUpdate::from(policy)),
                ApiVersion::Legacy,
            )
            .await
    }

    #[instrument(skip(self, request), fields(branch = request.branch()))]
    async fn request_build(&self, repo: RepoId, request: &BuildRequest) -> Result<()> {
        debug!("Requesting build");
        self.client
            .send(
                Method::POST,
                &endpoints::repo_requests(repo),
                Some(request),
                ApiVersion::V3,
            )
            .await
    }
}
