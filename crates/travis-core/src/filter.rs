//! Slug filtering and active/inactive partitioning.

use std::fmt;

use regex::Regex;

use crate::error::{Error, InvalidInputError};
use crate::types::RepositoryRecord;

/// Pattern that matches every slug containing a dash.
pub const DEFAULT_PATTERN: &str = ".*-.*";

/// A compiled slug pattern.
///
/// Matching is a search: a slug is selected when the pattern matches
/// anywhere inside it. Anchor with `^`/`$` to require a full match.
#[derive(Clone)]
pub struct SlugPattern {
    source: String,
    regex: Regex,
}

impl SlugPattern {
    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn new(pattern: impl AsRef<str>) -> Result<Self, Error> {
        let source = pattern.as_ref().to_string();
        let regex = Regex::new(&source).map_err(|e| InvalidInputError::Pattern {
            value: source.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { source, regex })
    }

    /// Returns the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, slug: &str) -> bool {
        self.regex.is_match(slug)
    }

    /// Records whose slug matches, in input order.
    pub fn filter(&self, records: &[RepositoryRecord]) -> Vec<RepositoryRecord> {
        records
            .iter()
            .filter(|r| self.is_match(&r.slug))
            .cloned()
            .collect()
    }
}

impl fmt::Debug for SlugPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SlugPattern").field(&self.source).finish()
    }
}

impl fmt::Display for SlugPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Records split by their `active` flag. Every input record lands in
/// exactly one side; input order is kept within each side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub active: Vec<RepositoryRecord>,
    pub inactive: Vec<RepositoryRecord>,
}

impl Partition {
    pub fn of(records: Vec<RepositoryRecord>) -> Self {
        let (active, inactive) = records.into_iter().partition(|r| r.active);
        Self { active, inactive }
    }
}
