//! Activation and build-request passes.

use tracing::{info, instrument, warn};

use travis_core::{BuildRequest, CiProvider, RepositoryRecord, SettingsPolicy};

use super::report::{RunReport, Step};
use crate::output;

/// First pass: activate each repository and apply the settings policy.
///
/// A failing call is recorded and the batch moves on. Settings are applied
/// even when activation failed, since the two calls are independent.
#[instrument(skip_all, fields(count = repos.len()))]
pub async fn activate_all<P: CiProvider + ?Sized>(
    provider: &P,
    repos: &[RepositoryRecord],
    build: &BuildRequest,
    settings: &SettingsPolicy,
    report: &mut RunReport,
) {
    for repo in repos {
        output::progress(&format!("Activating: {}", repo.slug));

        match provider.activate(repo.id, build).await {
            Ok(()) => report.activated += 1,
            Err(e) => {
                warn!(repo = %repo.slug, error = %e, "Activation failed");
                report.record(repo.id, &repo.slug, Step::Activate, &e);
            }
        }

        match provider.update_settings(repo.id, settings).await {
            Ok(()) => report.settings_applied += 1,
            Err(e) => {
                warn!(repo = %repo.slug, error = %e, "Settings update failed");
                report.record(repo.id, &repo.slug, Step::Settings, &e);
            }
        }
    }

    info!(
        activated = report.activated,
        settings_applied = report.settings_applied,
        "Activation pass finished"
    );
}

/// Second pass: request a build for each repository.
///
/// Build requests are rate limited by the provider, so this runs only after
/// every activation and settings call has completed.
#[instrument(skip_all, fields(count = repos.len()))]
pub async fn request_builds<P: CiProvider + ?Sized>(
    provider: &P,
    repos: &[RepositoryRecord],
    build: &BuildRequest,
    report: &mut RunReport,
) {
    for repo in repos {
        output::progress(&format!("Requesting rebuild: {}", repo.slug));

        match provider.request_build(repo.id, build).await {
            Ok(()) => report.builds_requested += 1,
            Err(e) => {
                warn!(repo = %repo.slug, error = %e, "Build request failed");
                report.record(repo.id, &repo.slug, Step::Build, &e);
            }
        }
    }

    info!(builds_requested = report.builds_requested, "Build pass finished");
}
