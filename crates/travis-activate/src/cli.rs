//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Activate Travis CI for every matching repository of a GitHub owner,
/// apply a build-settings policy, then request a first build for each.
#[derive(Parser, Debug)]
#[command(name = "travis-activate")]
#[command(author, version = env!("TRAVIS_ACTIVATE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// JSON config file (defaults to the user config directory)
    #[arg(long, env = "TRAVIS_ACTIVATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// GitHub user or organization whose repositories are processed
    #[arg(long, env = "TRAVIS_ACTIVATE_OWNER")]
    pub owner: Option<String>,

    /// Regular expression searched for in each repository slug
    #[arg(long)]
    pub pattern: Option<String>,

    /// Requested page size for the repository listing
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Branch to build on activation and on the build request
    #[arg(long)]
    pub branch: Option<String>,

    /// Travis API base URL
    #[arg(long, env = "TRAVIS_API_URL")]
    pub api_url: Option<String>,

    /// API token; when absent it is read from git config
    #[arg(long, env = "TRAVIS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// git config key holding the API token
    #[arg(long)]
    pub token_key: Option<String>,

    /// Do not ask Travis to resync from GitHub first
    #[arg(long)]
    pub skip_sync: bool,

    /// List what would be activated without changing anything
    #[arg(long)]
    pub dry_run: bool,
}
