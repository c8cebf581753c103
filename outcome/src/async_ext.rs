//! Asynchronous combinators.
//!
//! These mirror the synchronous combinators: a continuation is only created
//! (and therefore only polled) when the preceding step succeeded, so a chain
//! of `n` asynchronous merges starts step `k + 1` strictly after step `k`
//! resolved successfully.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::{Error, ErrorList, Outcome};

impl<T> Outcome<T> {
    /// Chains an asynchronous dependent step.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// # tokio_test_block_on(async {
    /// let chained = Outcome::success(2)
    ///     .merge_async(|x| async move { Outcome::success(x * 10) })
    ///     .await;
    /// assert_eq!(chained, Outcome::success(20));
    /// # });
    /// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
    /// #     tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(f)
    /// # }
    /// ```
    pub async fn merge_async<U, F, Fut>(self, next: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Success(value) => next(value).await,
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Asynchronous counterpart of [`Outcome::match_with`].
    pub async fn match_async<R, S, SFut, F, FFut>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(ErrorList) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => success(value).await,
            Self::Failure(errors) => failure(errors).await,
        }
    }

    /// Asynchronous counterpart of [`Outcome::match_first_error`].
    pub async fn match_first_error_async<R, S, SFut, F, FFut>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => success(value).await,
            Self::Failure(errors) => failure(errors.first().clone()).await,
        }
    }

    /// Asynchronous counterpart of [`Outcome::or_else`].
    pub async fn or_else_async<F, Fut>(self, recover: F) -> Self
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => recover(errors).await,
        }
    }

    /// Awaits `action` with the value when successful.
    pub async fn if_success_async<F, Fut>(&self, action: F)
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Success(value) = self {
            action(value).await;
        }
    }

    /// Awaits `action` with the errors when failed.
    pub async fn if_failure_async<F, Fut>(&self, action: F)
    where
        F: FnOnce(&ErrorList) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Failure(errors) = self {
            action(errors).await;
        }
    }
}

/// Chaining on futures that resolve to an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome::{Error, Outcome, OutcomeFutureExt};
///
/// async fn lookup(id: u32) -> Outcome<u32> {
///     Outcome::success(id)
/// }
///
/// async fn reject(_: u32) -> Outcome<String> {
///     Error::forbidden("Member.Locked", "member is locked").into()
/// }
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().expect("runtime");
/// let outcome = runtime.block_on(lookup(3).continue_merge_with(reject));
/// assert_eq!(outcome.errors()[0].code(), "Member.Locked");
/// ```
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Awaits this future and, when it succeeded, the continuation.
    fn continue_merge_with<U, F, Fut>(self, next: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.merge_async(next).await }
    }

    /// Awaits this future and maps its success value.
    fn map_outcome<U, F>(self, mapper: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(mapper) }
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

/// Awaits a spawned task that produces an [`Outcome`].
///
/// A task that was cancelled or panicked yields a failure with a single
/// Unexpected error coded `General.UnhandledException`, so callers of the
/// chain observe the fault as an ordinary outcome.
///
/// # Examples
///
/// ```
/// use outcome::{ErrorCategory, Outcome, join_outcome};
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build().expect("runtime");
/// runtime.block_on(async {
///     let handle = tokio::spawn(async {
///         tokio::time::sleep(std::time::Duration::from_secs(60)).await;
///         Outcome::success(1)
///     });
///     handle.abort();
///     let outcome = join_outcome(handle).await;
///     assert_eq!(outcome.errors()[0].category(), ErrorCategory::Unexpected);
/// });
/// ```
pub async fn join_outcome<T>(handle: JoinHandle<Outcome<T>>) -> Outcome<T> {
    match handle.await {
        Ok(outcome) => outcome,
        Err(join_error) => {
            tracing::debug!(
                cancelled = join_error.is_cancelled(),
                "spawned outcome task did not complete"
            );
            Outcome::from_exception(&join_error)
        }
    }
}
