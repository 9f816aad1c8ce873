//! Run configuration: defaults, overlaid by a JSON file, overlaid by flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use travis_api::DEFAULT_USER_AGENT;
use travis_core::filter::DEFAULT_PATTERN;
use travis_core::payload::DEFAULT_BRANCH;
use travis_core::{ApiUrl, BuildRequest, SettingsPolicy, SlugPattern};

use crate::cli::Cli;

/// Page size requested from the listing endpoint. The provider may cap it.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// git config key that stores the token.
pub const DEFAULT_TOKEN_KEY: &str = "travis.token";

/// On-disk configuration. Every field is optional.
///
/// ```json
/// {
///   "owner": "acme",
///   "pattern": "^acme/hw[0-9]+-",
///   "page_size": 100,
///   "branch": "master",
///   "settings": { "maximum_number_of_builds": 1 }
/// }
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub owner: Option<String>,
    pub pattern: Option<String>,
    pub page_size: Option<u32>,
    pub branch: Option<String>,
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
    pub token_key: Option<String>,
    pub settings: Option<SettingsPolicy>,
}

impl FileConfig {
    /// Load a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load the explicit file if given (it must exist), otherwise the default
    /// file if one exists, otherwise nothing.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub pattern: SlugPattern,
    pub page_size: u32,
    pub build: BuildRequest,
    pub settings: SettingsPolicy,
    pub api_url: ApiUrl,
    pub user_agent: String,
    pub token_key: String,
    pub skip_sync: bool,
    pub dry_run: bool,
}

impl Config {
    /// Resolve command-line flags over the discovered config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = FileConfig::discover(cli.config.as_deref())?;
        Self::resolve(cli, file)
    }

    /// Merge flags over a file config and validate the result.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let owner = cli
            .owner
            .clone()
            .or(file.owner)
            .context("No owner configured. Pass --owner or set \"owner\" in the config file.")?;
        if owner.trim().is_empty() {
            bail!("Owner must not be empty");
        }

        let pattern = cli
            .pattern
            .clone()
            .or(file.pattern)
            .unwrap_or_else(|| DEFAULT_PATTERN.to_string());
        let pattern = SlugPattern::new(&pattern).context("Invalid slug pattern")?;

        let page_size = cli.page_size.or(file.page_size).unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            bail!("Page size must be at least 1");
        }

        let branch = cli
            .branch
            .clone()
            .or(file.branch)
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        if branch.trim().is_empty() {
            bail!("Branch must not be empty");
        }

        let api_url = match cli.api_url.as_ref().or(file.api_url.as_ref()) {
            Some(url) => ApiUrl::new(url).context("Invalid API URL")?,
            None => ApiUrl::default(),
        };

        Ok(Self {
            owner: owner.trim().to_string(),
            pattern,
            page_size,
            build: BuildRequest::for_branch(branch.trim()),
            settings: file.settings.unwrap_or_default(),
            api_url,
            user_agent: file
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            token_key: cli
                .token_key
                .clone()
                .or(file.token_key)
                .unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_string()),
            skip_sync: cli.skip_sync,
            dry_run: cli.dry_run,
        })
    }
}

/// `<config dir>/travis-activate/config.json`, if a home directory is known.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "travis-activate").map(|dirs| dirs.config_dir().join("config.json"))
}
