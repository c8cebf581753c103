//! The success-or-errors outcome type.
//!
//! An [`Outcome`] is built once at a leaf operation and then only read or
//! transformed by combinators. A failure always carries at least one
//! [`Error`]; reading the success value from a failure is a programming
//! mistake and panics.

mod conversions;

use std::{
    fmt,
    panic::{self, AssertUnwindSafe},
};

use crate::{Error, ErrorList};

pub use conversions::IntoOutcome;

/// Either a success value or a non-empty, ordered list of errors.
///
/// `Outcome<()>` (the default type parameter) models operations that succeed
/// without a payload.
///
/// # Examples
///
/// ```
/// use outcome::{Error, Outcome};
///
/// fn find_member(id: u32) -> Outcome<String> {
///     if id == 7 {
///         Outcome::success("Ada".to_owned())
///     } else {
///         Error::not_found("Member.NotFound", "member was not found").into()
///     }
/// }
///
/// assert!(find_member(7).is_success());
/// assert_eq!(find_member(8).errors()[0].code(), "Member.NotFound");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an outcome may carry errors that should be handled"]
pub enum Outcome<T = ()> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed for one or more reasons.
    Failure(ErrorList),
}

impl Outcome<()> {
    /// A payload-free success.
    pub const fn ok() -> Self {
        Self::Success(())
    }
}

impl<T> Outcome<T> {
    /// Wraps a value as a success without inspecting it.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// A failure carrying a single error.
    pub fn failure(error: Error) -> Self {
        Self::Failure(ErrorList::single(error))
    }

    /// A failure carrying every supplied error, in order.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty; an empty list cannot describe a failure.
    /// Use [`Outcome::try_failures`] when the collection may be empty.
    #[track_caller]
    pub fn failures<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::Failure(ErrorList::new(errors))
    }

    /// A failure carrying every supplied error, or `None` when there are none.
    #[must_use]
    pub fn try_failures<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Error>,
    {
        ErrorList::try_new(errors).map(Self::Failure)
    }

    /// Converts a caught host error into a failure coded
    /// `General.UnhandledException`.
    pub fn from_exception<E>(exception: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::failure(Error::from_exception(exception))
    }

    /// Converts a caught host error into a failure with a caller-chosen code.
    pub fn from_exception_with_code<E>(code: impl Into<String>, exception: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::failure(Error::from_exception_with_code(code, exception))
    }

    /// Runs `operation`, converting a panic into an Unexpected failure.
    ///
    /// This is the leaf-level catch point for code that may panic; the panic
    /// message becomes the error message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{ErrorCategory, Outcome};
    ///
    /// let caught: Outcome<u8> = Outcome::catch_unwind(|| panic!("boom"));
    /// assert_eq!(caught.errors()[0].category(), ErrorCategory::Unexpected);
    /// assert_eq!(caught.errors()[0].message(), "boom");
    /// ```
    pub fn catch_unwind<F>(operation: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        panic::catch_unwind(AssertUnwindSafe(operation))
            .unwrap_or_else(|payload| Self::failure(Error::from_panic(payload.as_ref())))
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The errors of a failure, or an empty slice for a success.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors.as_slice(),
        }
    }

    /// The shared error list of a failure.
    #[must_use]
    pub const fn error_list(&self) -> Option<&ErrorList> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Borrows the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure. Branch with
    /// [`Outcome::match_with`] or [`Outcome::is_success`] first.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => invalid_value_access(errors),
        }
    }

    /// Takes the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => invalid_value_access(&errors),
        }
    }

    /// Takes the success value, or `T::default()` for a failure.
    #[must_use]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Borrows the payload, producing an outcome of references.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(errors) => Outcome::Failure(errors.clone()),
        }
    }

    /// Converts into a standard [`Result`] so `?` can propagate the errors.
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorList`] of a failed outcome.
    pub fn into_result(self) -> Result<T, ErrorList> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }
}

#[track_caller]
fn invalid_value_access(errors: &ErrorList) -> ! {
    panic!("the outcome value is only available on success; errors:\n{errors}")
}

fn write_failure(f: &mut fmt::Formatter<'_>, errors: &ErrorList) -> fmt::Result {
    write!(f, "Outcome [Failure]:")?;
    for error in errors {
        write!(f, "\n - {error}")?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Outcome [Success]: {value}"),
            Self::Failure(errors) => write_failure(f, errors),
        }
    }
}

/// Human-readable rendering of a payload-free [`Outcome`].
///
/// Returned by [`Outcome::display`].
#[derive(Debug, Clone, Copy)]
pub struct UnitDisplay<'a>(&'a Outcome<()>);

impl Outcome<()> {
    /// Renders a payload-free outcome.
    ///
    /// `()` has no [`Display`](fmt::Display), so unit outcomes render through
    /// this adapter instead of `to_string`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::ok().display().to_string(), "Outcome [Success]");
    ///
    /// let failed: Outcome = Error::conflict("Member.EmailInUse", "taken").into();
    /// assert_eq!(
    ///     failed.display().to_string(),
    ///     "Outcome [Failure]:\n - Error (Member.EmailInUse [Conflict]): taken"
    /// );
    /// ```
    #[must_use]
    pub const fn display(&self) -> UnitDisplay<'_> {
        UnitDisplay(self)
    }
}

impl fmt::Display for UnitDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Outcome::Success(()) => f.write_str("Outcome [Success]"),
            Outcome::Failure(errors) => write_failure(f, errors),
        }
    }
}
