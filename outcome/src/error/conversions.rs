//! Conversions from host failures (errors, panics) into [`Error`] values.

use std::{any::Any, error};

use super::{Error, defaults};

impl Error {
    /// Wraps a caught host error as an
    /// [`Unexpected`](super::ErrorCategory::Unexpected) error coded
    /// `General.UnhandledException`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Error, ErrorCategory};
    ///
    /// let io = std::io::Error::other("boom");
    /// let err = Error::from_exception(&io);
    /// assert_eq!(err.category(), ErrorCategory::Unexpected);
    /// assert_eq!(err.code(), "General.UnhandledException");
    /// assert_eq!(err.message(), "boom");
    /// ```
    #[must_use]
    pub fn from_exception<E>(exception: &E) -> Self
    where
        E: error::Error + ?Sized,
    {
        Self::from_exception_with_code(defaults::UNHANDLED_EXCEPTION_CODE, exception)
    }

    /// Wraps a caught host error as an Unexpected error with a caller-chosen
    /// code.
    #[must_use]
    pub fn from_exception_with_code<E>(code: impl Into<String>, exception: &E) -> Self
    where
        E: error::Error + ?Sized,
    {
        let converted = Self::unexpected(code, exception.to_string());
        tracing::debug!(code = converted.code(), "converted host error into outcome error");
        converted
    }

    /// Wraps a panic payload captured by [`std::panic::catch_unwind`].
    ///
    /// String payloads become the message; any other payload is reported
    /// generically.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic with a non-string payload".to_owned());
        tracing::debug!("converted panic into outcome error");
        defaults::unhandled_exception(message)
    }
}
