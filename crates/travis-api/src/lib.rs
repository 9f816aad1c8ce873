//! travis-api - Travis CI REST client.
//!
//! Implements [`travis_core::CiProvider`] over HTTP. All calls use API v3
//! except the settings update, which only exists on the legacy v2 surface.

mod client;
mod endpoints;
mod provider;

pub use client::{ApiVersion, DEFAULT_USER_AGENT, TravisClient};
pub use provider::TravisApi;
