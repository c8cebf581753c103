//! Explicit category-to-status table for boundary adapters.
//!
//! Transport adapters decide how a failed [`Outcome`](crate::Outcome) is
//! represented externally. [`StatusMap`] is the table they consult: a plain
//! value constructed (or loaded from configuration) by the adapter and passed
//! by reference, so different adapters and tests never share mutable state.

mod config;

use std::collections::{BTreeMap, btree_map};

use crate::{Error, ErrorCategory};

pub use config::{StatusMapConfig, StatusMapError};

/// Status returned for categories without an entry, unless overridden.
pub const DEFAULT_FALLBACK_STATUS: u16 = 500;

/// Mapping from [`ErrorCategory`] to a numeric response status.
///
/// # Examples
///
/// ```
/// use outcome::{ErrorCategory, StatusMap};
///
/// let statuses = StatusMap::default().with(ErrorCategory::Custom(42), 418);
/// assert_eq!(statuses.resolve(ErrorCategory::NotFound), 404);
/// assert_eq!(statuses.resolve(ErrorCategory::Custom(42)), 418);
/// assert_eq!(statuses.resolve(ErrorCategory::Custom(43)), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMap {
    entries: BTreeMap<ErrorCategory, u16>,
    fallback: u16,
}

impl Default for StatusMap {
    /// The conventional HTTP-style table.
    fn default() -> Self {
        Self::empty()
            .with(ErrorCategory::Unexpected, 500)
            .with(ErrorCategory::Failure, 400)
            .with(ErrorCategory::Validation, 400)
            .with(ErrorCategory::NotFound, 404)
            .with(ErrorCategory::Conflict, 409)
            .with(ErrorCategory::Unauthorized, 401)
            .with(ErrorCategory::Forbidden, 403)
            .with(ErrorCategory::Invalid, 422)
    }
}

impl StatusMap {
    /// A table with no entries and the default fallback.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: DEFAULT_FALLBACK_STATUS,
        }
    }

    /// Returns the table with `category` mapped to `status`.
    #[must_use]
    pub fn with(mut self, category: ErrorCategory, status: u16) -> Self {
        self.insert(category, status);
        self
    }

    /// Returns the table with a different fallback status.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: u16) -> Self {
        self.fallback = fallback;
        self
    }

    /// Maps `category` to `status`, returning the previous status.
    pub fn insert(&mut self, category: ErrorCategory, status: u16) -> Option<u16> {
        self.entries.insert(category, status)
    }

    /// Removes the entry for `category`, returning its status.
    pub fn remove(&mut self, category: ErrorCategory) -> Option<u16> {
        self.entries.remove(&category)
    }

    /// Removes every entry; the fallback is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` when `category` has an explicit entry.
    #[must_use]
    pub fn contains(&self, category: ErrorCategory) -> bool {
        self.entries.contains_key(&category)
    }

    /// Status used for unmapped categories.
    #[must_use]
    pub const fn fallback(&self) -> u16 {
        self.fallback
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table has no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the explicit entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorCategory, u16)> + '_ {
        self.entries.iter().map(|(category, status)| (*category, *status))
    }

    /// Status for `category`, or the fallback when unmapped.
    #[must_use]
    pub fn resolve(&self, category: ErrorCategory) -> u16 {
        self.entries.get(&category).copied().unwrap_or_else(|| {
            tracing::debug!(%category, fallback = self.fallback, "no status mapped for category");
            self.fallback
        })
    }

    /// Status for a list of errors, decided by the first error.
    ///
    /// An empty slice (a successful outcome's errors) resolves to the
    /// fallback.
    #[must_use]
    pub fn resolve_errors(&self, errors: &[Error]) -> u16 {
        errors
            .first()
            .map_or(self.fallback, |error| self.resolve(error.category()))
    }
}

impl Extend<(ErrorCategory, u16)> for StatusMap {
    fn extend<I: IntoIterator<Item = (ErrorCategory, u16)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a StatusMap {
    type Item = (&'a ErrorCategory, &'a u16);
    type IntoIter = btree_map::Iter<'a, ErrorCategory, u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests;
