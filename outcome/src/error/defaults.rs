//! Ready-made errors for common failure situations.
//!
//! # Examples
//!
//! ```
//! use outcome::{ErrorCategory, defaults};
//!
//! let err = defaults::not_found();
//! assert_eq!(err.code(), "General.NotFound");
//! assert_eq!(err.category(), ErrorCategory::NotFound);
//! ```

use super::Error;

/// Code used for errors converted from exceptions, panics and task failures.
pub const UNHANDLED_EXCEPTION_CODE: &str = "General.UnhandledException";

/// An [`Unexpected`](super::ErrorCategory::Unexpected) error wrapping the
/// message of something that failed outside the outcome algebra.
#[must_use]
pub fn unhandled_exception(message: impl Into<String>) -> Error {
    Error::unexpected(UNHANDLED_EXCEPTION_CODE, message)
}

/// Generic unexpected failure.
#[must_use]
pub fn unexpected() -> Error {
    Error::unexpected("General.Unexpected", "An unexpected error has occurred.")
}

/// Generic missing-entity failure.
#[must_use]
pub fn not_found() -> Error {
    Error::not_found("General.NotFound", "Not found error has occurred.")
}

/// Generic state-conflict failure.
#[must_use]
pub fn conflict() -> Error {
    Error::conflict("General.Conflict", "A conflict error has occurred.")
}

/// Generic authentication failure.
#[must_use]
pub fn unauthorized() -> Error {
    Error::unauthorized(
        "General.Unauthorized",
        "An authentication/authorization error has occurred.",
    )
}
