//! Outcome of a run.

use std::fmt;

use travis_core::RepoId;
use travis_core::error::Error;

use crate::output;

/// Per-repository call that can fail without stopping the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Activate,
    Settings,
    Build,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::Activate => "activate",
            Step::Settings => "settings",
            Step::Build => "build request",
        };
        f.write_str(s)
    }
}

/// Why the provider refused a call, when it says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    RateLimited,
    Unauthorized,
}

impl Refusal {
    fn of(error: &Error) -> Option<Self> {
        match error {
            Error::Protocol(p) if p.is_rate_limited() => Some(Refusal::RateLimited),
            Error::Protocol(p) if p.is_auth_error() => Some(Refusal::Unauthorized),
            Error::Auth(_) => Some(Refusal::Unauthorized),
            _ => None,
        }
    }
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::RateLimited => f.write_str("rate limited"),
            Refusal::Unauthorized => f.write_str("token not authorized"),
        }
    }
}

/// A failed per-repository call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub repo: RepoId,
    pub slug: String,
    pub step: Step,
    pub error: String,
    pub refusal: Option<Refusal>,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}: {}", self.slug, self.repo, self.step, self.error)?;
        if let Some(refusal) = self.refusal {
            write!(f, " [{refusal}]")?;
        }
        Ok(())
    }
}

/// How the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Every matching repository was already active.
    NothingToDo,
    /// Dry run: inactive repositories were listed, nothing was changed.
    DryRun,
    /// Activation and build passes ran.
    #[default]
    Completed,
}

/// Counters and failures collected over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: Outcome,
    /// Records returned by the listing.
    pub listed: usize,
    /// Records whose slug matched.
    pub matched: usize,
    /// Matching records that were inactive.
    pub inactive: usize,
    pub activated: usize,
    pub settings_applied: usize,
    pub builds_requested: usize,
    pub failures: Vec<Failure>,
}

impl RunReport {
    pub fn record(&mut self, repo: RepoId, slug: &str, step: Step, error: &Error) {
        self.failures.push(Failure {
            repo,
            slug: slug.to_string(),
            step,
            error: error.to_string(),
            refusal: Refusal::of(error),
        });
    }

    /// Failures the provider attributed to rate limiting.
    pub fn rate_limited(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| f.refusal == Some(Refusal::RateLimited))
            .count()
    }

    /// Print the end-of-run summary.
    pub fn print_summary(&self) {
        if self.outcome != Outcome::Completed {
            return;
        }

        output::rule();
        output::field("Activated", &format!("{}/{}", self.activated, self.inactive));
        output::field(
            "Settings applied",
            &format!("{}/{}", self.settings_applied, self.inactive),
        );
        output::field(
            "Builds requested",
            &format!("{}/{}", self.builds_requested, self.inactive),
        );

        if self.failures.is_empty() {
            output::success("All repositories processed");
            return;
        }

        output::warning(&format!("{} call(s) failed:", self.failures.len()));
        for failure in &self.failures {
            output::error(&failure.to_string());
        }

        let limited = self.rate_limited();
        if limited > 0 {
            output::warning(&format!(
                "{limited} call(s) were rate limited; rerun later to finish them"
            ));
        }
    }
}
