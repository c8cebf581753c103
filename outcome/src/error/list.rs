//! Non-empty, shared list of errors carried by a failed outcome.

use std::{error, fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::Error;

/// Ordered, non-empty collection of [`Error`]s.
///
/// The list is reference counted, so cloning it (for example when
/// [`Outcome::map`](crate::Outcome::map) re-types a failure) shares the
/// existing allocation rather than copying errors. It is never mutated after
/// construction.
///
/// # Examples
///
/// ```
/// use outcome::{Error, ErrorList};
///
/// let list = ErrorList::new([
///     Error::validation("FirstName.Empty", "first name is required"),
///     Error::validation("Email.Empty", "email is required"),
/// ]);
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.first().code(), "FirstName.Empty");
/// assert!(ErrorList::try_new(Vec::new()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorList(Arc<[Error]>);

/// Returned when an empty collection is offered where a failure is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a failure requires at least one error")]
pub struct EmptyErrorList;

impl ErrorList {
    /// Tries to build a list from an iterator of errors.
    ///
    /// The iterator is consumed eagerly. Returns `None` when it yields no
    /// errors.
    #[must_use]
    pub fn try_new<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        let collected: Vec<Error> = errors.into_iter().collect();
        (!collected.is_empty()).then(|| Self(collected.into()))
    }

    /// Builds a list from at least one error.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`ErrorList::try_new`] when the
    /// collection may be empty.
    #[must_use]
    #[track_caller]
    pub fn new<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::try_new(errors).map_or_else(
            || {
                tracing::warn!("attempted to build a failure from an empty error list");
                panic!("{EmptyErrorList}")
            },
            |list| list,
        )
    }

    /// Builds a list holding exactly one error.
    #[must_use]
    pub fn single(error: Error) -> Self {
        Self(Arc::from([error]))
    }

    /// The first (primary) error in the list.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "constructors guarantee the list is non-empty"
    )]
    pub fn first(&self) -> &Error {
        &self.0[0]
    }

    /// Number of errors in the list; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; provided for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Borrows the errors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Error] {
        &self.0
    }

    /// Iterates over the contained errors in order.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    /// Copies the errors into a fresh vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Error> {
        self.0.to_vec()
    }

    /// Returns `true` when both lists share the same allocation.
    #[must_use]
    pub fn shares_allocation(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl error::Error for ErrorList {}

impl AsRef<[Error]> for ErrorList {
    fn as_ref(&self) -> &[Error] {
        &self.0
    }
}

impl From<Error> for ErrorList {
    fn from(error: Error) -> Self {
        Self::single(error)
    }
}

impl TryFrom<Vec<Error>> for ErrorList {
    type Error = EmptyErrorList;

    fn try_from(errors: Vec<Error>) -> Result<Self, Self::Error> {
        Self::try_new(errors).ok_or(EmptyErrorList)
    }
}

impl PartialEq<[Error]> for ErrorList {
    fn eq(&self, other: &[Error]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<Vec<Error>> for ErrorList {
    fn eq(&self, other: &Vec<Error>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

impl Serialize for ErrorList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for ErrorList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let errors = Vec::<Error>::deserialize(deserializer)?;
        Self::try_from(errors).map_err(serde::de::Error::custom)
    }
}
