//! Pagination metadata for listing endpoints.

use serde::{Deserialize, Serialize};

use super::RepositoryRecord;
use crate::Result;
use crate::error::ProtocolError;

/// A `limit`/`offset` pair addressing one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub limit: u32,
    pub offset: u32,
}

impl PageCursor {
    /// Cursor for the first page.
    pub fn first(limit: u32) -> Self {
        Self { limit, offset: 0 }
    }

    /// One past the last index this page can cover.
    pub fn end(&self) -> u32 {
        self.offset.saturating_add(self.limit)
    }
}

/// The `@pagination` block returned with each page.
///
/// The provider caps `limit` server-side, so the cursor for the next page
/// must always be taken from `next`, never computed by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub count: Option<u32>,
    pub is_last: bool,
    #[serde(default)]
    pub next: Option<PageCursor>,
}

impl Pagination {
    /// Cursor for the page after `current`, or `None` on the last page.
    ///
    /// A page that is not last must carry a `next` link that moves past
    /// `current`. Anything else is a protocol error, since following it would
    /// either loop or drop records.
    pub fn next_cursor(&self, current: PageCursor) -> Result<Option<PageCursor>> {
        if self.is_last {
            return Ok(None);
        }
        match self.next {
            Some(next) if next.offset > current.offset => Ok(Some(next)),
            Some(_) => Err(ProtocolError::malformed(200, "next link does not advance").into()),
            None => Err(ProtocolError::malformed(
                200,
                "page is not marked last but has no next link",
            )
            .into()),
        }
    }
}

/// One page of repository records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub repositories: Vec<RepositoryRecord>,

    #[serde(rename = "@pagination")]
    pub pagination: Pagination,
}
