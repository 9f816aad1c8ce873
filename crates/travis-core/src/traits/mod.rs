//! Core trait for CI provider behavior.

mod provider;

pub use provider::CiProvider;
