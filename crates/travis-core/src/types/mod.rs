//! Validated and wire-level types shared across crates.

mod api_url;
mod pagination;
mod repository;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
pub use pagination::{Page, PageCursor, Pagination};
pub use repository::{BranchRef, OwnerRef, Permissions, RepoId, RepositoryRecord, UserInfo};
