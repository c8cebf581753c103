//! A presence wrapper for values that may be absent without having failed.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A value that is either present or empty.
///
/// Absence is not a failure: an empty `Optional` carries no [`Error`](crate::Error).
///
/// Equality is defined over the wrapped value only. Two present values are
/// equal when the wrapped values are; an empty optional is equal to nothing,
/// not even another empty optional, so `Optional` implements [`PartialEq`]
/// but not [`Eq`].
///
/// # Examples
///
/// ```
/// use outcome::Optional;
///
/// let nickname = Optional::of_nullable(None::<String>);
/// assert_eq!(nickname.or_else("anonymous".to_owned()), "anonymous");
///
/// assert_eq!(Optional::of(3), Optional::of(3));
/// assert_ne!(Optional::<u8>::empty(), Optional::empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// Wraps a present value.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Wraps a value that may be absent.
    #[must_use]
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    /// An empty optional.
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Returns `true` when a value is present.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Borrows the present value.
    ///
    /// # Panics
    ///
    /// Panics when the optional is empty.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        self.value
            .as_ref()
            .unwrap_or_else(|| panic!("the optional value is only available when present"))
    }

    /// Takes the value, or `fallback` when empty.
    #[must_use]
    pub fn or_else(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    /// Takes the value, or the result of `supplier` when empty.
    ///
    /// `supplier` is only called when the optional is empty.
    #[must_use]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(supplier)
    }

    /// Runs `present` with the value, or `absent` when empty.
    pub fn if_present_or_else<P, A>(&self, present: P, absent: A)
    where
        P: FnOnce(&T),
        A: FnOnce(),
    {
        match &self.value {
            Some(value) => present(value),
            None => absent(),
        }
    }

    /// Folds the optional into a value through exactly one closure.
    pub fn if_present_or_else_map<R, P, A>(self, present: P, absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self.value {
            Some(value) => present(value),
            None => absent(),
        }
    }

    /// Converts into the standard library option.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(value) = &self.value {
            value.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}
