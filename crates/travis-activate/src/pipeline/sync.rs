//! Ask the provider to resync its repository list from GitHub.

use anyhow::Result;
use tracing::{info, instrument, warn};

use travis_core::CiProvider;
use travis_core::error::Error;

use super::fatal;
use crate::output;

/// Look up the token's user and request a sync for it.
///
/// The user lookup is fatal on failure. The sync itself is not: the listing
/// that follows works on whatever the provider already knows.
#[instrument(skip(provider))]
pub async fn trigger_sync<P: CiProvider + ?Sized>(provider: &P) -> Result<()> {
    let user = provider
        .current_user()
        .await
        .map_err(|e| fatal("Failed to load user info from Travis", e))?;

    info!(user_id = user.id, login = ?user.login, "Loaded user");

    match provider.sync_user(user.id).await {
        Ok(()) => output::progress("Requested sync from GitHub to Travis."),
        Err(e) => {
            warn!(error = %e, "Sync request failed");
            output::warning(&format!(
                "Requested sync from GitHub to Travis; Travis responded: \"{}\"",
                sync_message(&e)
            ));
        }
    }

    Ok(())
}

/// The provider's `error_message` when there is one.
fn sync_message(err: &Error) -> String {
    match err {
        Error::Protocol(p) => p
            .message
            .clone()
            .or_else(|| p.body.clone())
            .unwrap_or_else(|| format!("HTTP {}", p.status)),
        other => other.to_string(),
    }
}
