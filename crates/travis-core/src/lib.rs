//! travis-core - Core types and traits for batch Travis CI activation.

pub mod error;
pub mod filter;
pub mod payload;
pub mod token;
pub mod traits;
pub mod types;

pub use error::Error;
pub use filter::{Partition, SlugPattern};
pub use payload::{BuildRequest, SettingsPolicy};
pub use token::ApiToken;
pub use traits::CiProvider;
pub use types::{ApiUrl, Page, PageCursor, Pagination, RepoId, RepositoryRecord, UserInfo};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
