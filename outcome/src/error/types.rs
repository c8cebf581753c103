//! The immutable `(category, code, message)` error value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ErrorCategory;

/// One categorised failure reason.
///
/// Errors are plain data: they are returned inside a failed
/// [`Outcome`](crate::Outcome) rather than raised, and they deliberately do not
/// implement [`std::error::Error`]. Equality is structural over category, code
/// and message.
///
/// # Examples
///
/// ```
/// use outcome::{Error, ErrorCategory};
///
/// let err = Error::not_found("Member.NotFound", "member was not found");
/// assert_eq!(err.category(), ErrorCategory::NotFound);
/// assert_eq!(err.code(), "Member.NotFound");
/// assert_eq!(err.to_string(), "Error (Member.NotFound [NotFound]): member was not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Error {
    category: ErrorCategory,
    code: String,
    message: String,
}

impl Error {
    /// Creates an error in an arbitrary category.
    #[must_use]
    pub fn new(
        category: ErrorCategory,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorCategory::Unexpected`].
    #[must_use]
    pub fn unexpected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Unexpected, code, message)
    }

    /// Convenience constructor for [`ErrorCategory::Failure`].
    #[must_use]
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Failure, code, message)
    }

    /// Convenience constructor for [`ErrorCategory::Validation`].
    #[must_use]
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Validation, code, message)
    }

    /// Convenience constructor for [`ErrorCategory::NotFound`].
    #[must_use]
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::NotFound, code, message)
    }

    /// Convenience constructor for [`ErrorCategory::Conflict`].
    #[must_use]
    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Conflict, code, message)
    }

    /// Convenience constructor for [`ErrorCategory::Unauthorized`].
    #[must_use]
    pub fn unauthorized(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Unauthorized, code, message)
    }

    /// Convenience constructor for [`ErrorCategory::Forbidden`].
    #[must_use]
    pub fn forbidden(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Forbidden, code, message)
    }

    /// Convenience constructor for [`ErrorCategory::Invalid`].
    #[must_use]
    pub fn invalid(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Invalid, code, message)
    }

    /// Creates an error with a caller-defined integer category.
    ///
    /// Integers that match a named category produce that category.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Error, ErrorCategory};
    ///
    /// let err = Error::custom("Billing.Quota", "quota exhausted", 42);
    /// assert_eq!(err.category(), ErrorCategory::Custom(42));
    /// assert!(err.category().is_custom());
    /// ```
    #[must_use]
    pub fn custom(code: impl Into<String>, message: impl Into<String>, category: i32) -> Self {
        Self::new(ErrorCategory::from_code(category), code, message)
    }

    /// Category of the error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Short machine-readable code, for example `Member.NotFound`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for [`ErrorCategory::Validation`] errors.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.category == ErrorCategory::Validation
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error ({} [{}]): {}",
            self.code, self.category, self.message
        )
    }
}
