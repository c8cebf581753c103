//! Explicit conversions into [`Outcome`].
//!
//! Errors, error collections and host failures lift into a failed outcome
//! through `From` or [`IntoOutcome`], so every conversion is visible at the
//! call site as `.into()` or `.into_outcome()`.

use crate::{Error, ErrorList};

use super::Outcome;

/// Conversion of failure-describing values (and fallible results) into an
/// [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome::{Error, IntoOutcome, Outcome};
///
/// let parsed: Outcome<u16> = "80".parse::<u16>().into_outcome();
/// assert_eq!(parsed, Outcome::success(80));
///
/// let failed: Outcome<u16> = "eighty".parse::<u16>().into_outcome();
/// assert_eq!(failed.errors()[0].code(), "General.UnhandledException");
///
/// let invalid: Outcome<u16> = Error::invalid("Port.Range", "port out of range").into_outcome();
/// assert!(invalid.is_failure());
/// ```
pub trait IntoOutcome<T> {
    /// Performs the conversion.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T> IntoOutcome<T> for Outcome<T> {
    fn into_outcome(self) -> Outcome<T> {
        self
    }
}

impl<T> IntoOutcome<T> for Error {
    fn into_outcome(self) -> Outcome<T> {
        Outcome::failure(self)
    }
}

impl<T> IntoOutcome<T> for ErrorList {
    fn into_outcome(self) -> Outcome<T> {
        Outcome::Failure(self)
    }
}

impl<T> IntoOutcome<T> for Vec<Error> {
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::failures(self)
    }
}

impl<T, const N: usize> IntoOutcome<T> for [Error; N] {
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::failures(self)
    }
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::from_exception(&err),
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> From<ErrorList> for Outcome<T> {
    fn from(errors: ErrorList) -> Self {
        Self::Failure(errors)
    }
}

impl<T> From<Vec<Error>> for Outcome<T> {
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    fn from(errors: Vec<Error>) -> Self {
        Self::failures(errors)
    }
}

impl<T, const N: usize> From<[Error; N]> for Outcome<T> {
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    fn from(errors: [Error; N]) -> Self {
        Self::failures(errors)
    }
}

impl<T> From<Result<T, ErrorList>> for Outcome<T> {
    fn from(result: Result<T, ErrorList>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(errors) => Self::Failure(errors),
        }
    }
}
