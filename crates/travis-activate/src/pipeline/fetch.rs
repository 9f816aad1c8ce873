//! Collect every repository of an owner across pages.

use anyhow::Result;
use tracing::{debug, instrument};

use travis_core::{CiProvider, PageCursor, RepositoryRecord};

use super::fatal;
use crate::output;

/// Fetch all pages, in provider order.
///
/// Only the first request uses `page_size`. After that the cursor comes from
/// the provider's `next` link, since the provider silently caps the limit.
#[instrument(skip(provider))]
pub async fn fetch_all<P: CiProvider + ?Sized>(
    provider: &P,
    owner: &str,
    page_size: u32,
) -> Result<Vec<RepositoryRecord>> {
    let mut records = Vec::new();
    let mut cursor = PageCursor::first(page_size);

    loop {
        output::progress(&format!("Fetching repos: {} -> {}", cursor.offset, cursor.end()));

        let page = provider
            .list_repositories(owner, cursor)
            .await
            .map_err(|e| fatal("Failed to load repo list from Travis", e))?;

        debug!(
            received = page.repositories.len(),
            is_last = page.pagination.is_last,
            "Fetched page"
        );
        records.extend(page.repositories);

        match page
            .pagination
            .next_cursor(cursor)
            .map_err(|e| fatal("Failed to load repo list from Travis", e))?
        {
            Some(next) => cursor = next,
            None => break,
        }
    }

    Ok(records)
}
