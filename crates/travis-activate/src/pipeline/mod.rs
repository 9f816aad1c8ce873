//! The activation run: sync, list, filter, activate, build.
//!
//! Stages run strictly one after another against a [`CiProvider`]. Only the
//! user lookup and the listing are fatal; per-repository calls are collected
//! into the [`RunReport`].

mod activate;
mod fetch;
mod report;
mod sync;

#[cfg(test)]
mod fake;

use anyhow::Result;
use tracing::info;

use travis_core::error::Error;
use travis_core::{CiProvider, Partition};

use crate::config::Config;
use crate::output;

use report::{Outcome, RunReport};

/// Run every stage against `provider`.
pub async fn run<P: CiProvider + ?Sized>(provider: &P, config: &Config) -> Result<RunReport> {
    let mut report = RunReport::default();

    if config.skip_sync {
        info!("Skipping sync");
    } else {
        sync::trigger_sync(provider).await?;
    }

    let records = fetch::fetch_all(provider, &config.owner, config.page_size).await?;
    report.listed = records.len();

    let matching = config.pattern.filter(&records);
    report.matched = matching.len();

    output::rule();
    output::progress(&format!(
        "Total repos found: {} of {} matching {}",
        report.matched, report.listed, config.pattern
    ));

    let Partition { active, inactive } = Partition::of(matching);
    report.inactive = inactive.len();
    info!(active = active.len(), inactive = inactive.len(), "Partitioned");

    if inactive.is_empty() {
        output::success("Every repo is active, nothing to do.");
        report.outcome = Outcome::NothingToDo;
        return Ok(report);
    }

    output::progress(&format!(
        "Total repos needing activation: {}",
        inactive.len()
    ));

    if config.dry_run {
        for repo in &inactive {
            let note = if repo.can_activate() {
                ""
            } else {
                " (token lacks activate permission)"
            };
            output::progress(&format!("Would activate: {} [{}]{}", repo.slug, repo.id, note));
        }
        report.outcome = Outcome::DryRun;
        return Ok(report);
    }

    activate::activate_all(
        provider,
        &inactive,
        &config.build,
        &config.settings,
        &mut report,
    )
    .await;

    output::rule();

    activate::request_builds(provider, &inactive, &config.build, &mut report).await;

    report.outcome = Outcome::Completed;
    Ok(report)
}

/// Wrap a fatal provider error, keeping the raw response payload in the
/// message so it reaches the console.
fn fatal(what: &str, err: Error) -> anyhow::Error {
    let payload = match &err {
        Error::Protocol(p) => p.body.clone().filter(|b| !b.trim().is_empty()),
        _ => None,
    };

    match payload {
        Some(body) => anyhow::Error::new(err).context(format!("{}: {}", what, body.trim())),
        None => anyhow::Error::new(err).context(what.to_string()),
    }
}
