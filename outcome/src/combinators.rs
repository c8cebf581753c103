//! Synchronous combinators over [`Outcome`].
//!
//! Every combinator consumes both branches explicitly. Failures pass through
//! [`Outcome::map`] and [`Outcome::merge`] untouched: the same shared
//! [`ErrorList`] is moved into the new outcome.

use crate::{Error, ErrorList, Outcome};

impl<T> Outcome<T> {
    /// Folds the outcome into a single value.
    ///
    /// Exactly one of the closures runs; `failure` receives the full ordered
    /// error list.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Error, Outcome};
    ///
    /// let found: Outcome<u32> = Outcome::success(7);
    /// let text = found.match_with(|id| format!("member {id}"), |errors| errors.to_string());
    /// assert_eq!(text, "member 7");
    /// ```
    pub fn match_with<R, S, F>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(&ErrorList) -> R,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(errors) => failure(&errors),
        }
    }

    /// Folds the outcome, handing only the first error to `failure`.
    ///
    /// Use [`Outcome::match_with`] when every error matters.
    pub fn match_first_error<R, S, F>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(&Error) -> R,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(errors) => failure(errors.first()),
        }
    }

    /// Transforms the success value, propagating failures unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Error, Outcome};
    ///
    /// let doubled = Outcome::success(21).map(|n| n * 2);
    /// assert_eq!(doubled, Outcome::success(42));
    ///
    /// let failed: Outcome<i32> = Error::invalid("X", "y").into();
    /// assert_eq!(failed.clone().map(|n| n * 2).errors(), failed.errors());
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Chains a dependent step that may itself fail.
    ///
    /// On success the continuation runs and its outcome is returned. On
    /// failure the continuation never runs and the original errors are
    /// propagated, so a chain of merges stops at its first failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Error, Outcome};
    ///
    /// let chained = Outcome::success(42)
    ///     .merge(|x| Outcome::success(x.to_string()))
    ///     .merge(|_| -> Outcome<String> { Error::invalid("X", "y").into() });
    /// assert_eq!(chained.errors().len(), 1);
    /// assert_eq!(chained.errors()[0].code(), "X");
    /// ```
    pub fn merge<U, F>(self, next: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Replaces a failure with the outcome of `recover`; successes pass
    /// through unchanged.
    pub fn or_else<F>(self, recover: F) -> Self
    where
        F: FnOnce(ErrorList) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => recover(errors),
        }
    }

    /// Re-types a failure so it can be returned with a different payload.
    ///
    /// The error list is shared, not copied.
    ///
    /// # Panics
    ///
    /// Panics when called on a success, which has no errors to carry.
    #[track_caller]
    pub fn into_error_outcome<U>(self) -> Outcome<U> {
        match self {
            Self::Failure(errors) => Outcome::Failure(errors),
            Self::Success(_) => {
                tracing::warn!("attempted to re-type a successful outcome as a failure");
                panic!("only a failed outcome can be converted into an error outcome")
            }
        }
    }

    /// Runs `action` with the value when successful.
    pub fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            action(value);
        }
    }

    /// Runs `action` with the errors when failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Error, Outcome};
    ///
    /// let failed: Outcome = Error::conflict("Member.EmailInUse", "taken").into();
    /// let mut logged = Vec::new();
    /// failed.if_failure(|errors| logged.extend(errors.iter().map(|e| e.code().to_owned())));
    /// assert_eq!(logged, ["Member.EmailInUse"]);
    /// ```
    pub fn if_failure<F>(&self, action: F)
    where
        F: FnOnce(&ErrorList),
    {
        if let Self::Failure(errors) = self {
            action(errors);
        }
    }

    /// Runs exactly one of the two side-effecting closures.
    pub fn if_or_else<S, F>(&self, on_success: S, on_failure: F)
    where
        S: FnOnce(&T),
        F: FnOnce(&ErrorList),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }
}
