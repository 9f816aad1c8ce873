//! travis-activate - batch Travis CI activation for a GitHub owner.
//!
//! Resyncs Travis with GitHub, lists the owner's repositories, activates the
//! inactive ones matching a slug pattern with a fixed settings policy, and
//! finally requests a build for each of them.

mod cli;
mod config;
mod credential;
mod output;
mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use travis_api::TravisApi;

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let config = Config::load(&cli)?;
    let token = credential::load_token(cli.token.as_deref(), &config.token_key)
        .context("Failed to load Travis API token")?;

    let provider = TravisApi::new(config.api_url.clone(), &token, &config.user_agent)
        .context("Failed to create Travis client")?;
    info!(api = %provider.url(), owner = %config.owner, "Starting run");

    let report = pipeline::run(&provider, &config).await?;
    report.print_summary();

    Ok(())
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
