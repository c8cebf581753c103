//! Accumulation of independent validation failures.
//!
//! Unlike [`Outcome::merge`], which stops at the first failure,
//! [`ValidationsResult`] records every violated rule before producing a
//! single [`Outcome`].

mod failure;

use std::ops::{Add, AddAssign};

use thiserror::Error as ThisError;

use crate::{Error, ErrorCategory, Outcome};

pub use failure::ValidationFailure;

/// Returned when a non-Validation error is offered to a [`ValidationsResult`].
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("validation results only accept Validation errors, got {category} ({code})")]
pub struct CategoryMismatch {
    /// Category of the rejected error.
    pub category: ErrorCategory,
    /// Code of the rejected error.
    pub code: String,
}

/// Mutable builder collecting Validation-category errors.
///
/// The builder is meant for a single owner performing one validation pass.
/// Every stored error is guaranteed to be in
/// [`ErrorCategory::Validation`].
///
/// # Examples
///
/// ```
/// use outcome::{Error, Outcome, ValidationsResult};
///
/// let first_name = "";
/// let email = "";
///
/// let mut validations = ValidationsResult::new();
/// validations
///     .add_on_failure(|| !first_name.is_empty(), Error::validation("FirstName.Empty", "first name is required"))
///     .add_on_failure(|| !email.is_empty(), Error::validation("Email.Empty", "email is required"));
///
/// let outcome: Outcome<String> = validations.to_result(None);
/// let codes: Vec<_> = outcome.errors().iter().map(Error::code).collect();
/// assert_eq!(codes, ["FirstName.Empty", "Email.Empty"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationsResult {
    errors: Vec<Error>,
}

impl ValidationsResult {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// The errors recorded so far, in insertion order.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns `true` while no error has been recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records a Validation error built from `code` and `message`.
    pub fn add_validation_error(
        &mut self,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.errors.push(Error::validation(code, message));
        self
    }

    /// Records an existing error.
    ///
    /// # Panics
    ///
    /// Panics if `error` is not in [`ErrorCategory::Validation`]; nothing is
    /// recorded in that case. Use [`ValidationsResult::try_add_error`] to
    /// handle the mismatch instead.
    #[track_caller]
    pub fn add_error(&mut self, error: Error) -> &mut Self {
        match self.try_add_error(error) {
            Ok(this) => this,
            Err(mismatch) => panic!("{mismatch}"),
        }
    }

    /// Records an existing error, rejecting non-Validation categories.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryMismatch`] and records nothing when `error` is not a
    /// Validation error.
    pub fn try_add_error(&mut self, error: Error) -> Result<&mut Self, CategoryMismatch> {
        guard_category(&error)?;
        self.errors.push(error);
        Ok(self)
    }

    /// Evaluates `predicate` and records `error` when it returns `false`.
    ///
    /// The predicate states the condition that must hold; the error describes
    /// its violation.
    ///
    /// # Panics
    ///
    /// Panics if `error` is not in [`ErrorCategory::Validation`], whatever the
    /// predicate returns.
    #[track_caller]
    pub fn add_on_failure<P>(&mut self, predicate: P, error: Error) -> &mut Self
    where
        P: FnOnce() -> bool,
    {
        if let Err(mismatch) = guard_category(&error) {
            panic!("{mismatch}");
        }
        if !predicate() {
            self.errors.push(error);
        }
        self
    }

    /// Appends every error of `other` after this accumulator's errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::ValidationsResult;
    ///
    /// let mut names = ValidationsResult::new();
    /// names.add_validation_error("FirstName.Empty", "first name is required");
    /// let mut contact = ValidationsResult::new();
    /// contact.add_validation_error("Email.Empty", "email is required");
    ///
    /// let combined = names.combine(contact);
    /// let codes: Vec<_> = combined.errors().iter().map(|e| e.code()).collect();
    /// assert_eq!(codes, ["FirstName.Empty", "Email.Empty"]);
    /// ```
    #[must_use]
    pub fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Finalises the accumulator into an [`Outcome`].
    ///
    /// With no recorded errors the result is a success carrying `value`.
    /// Otherwise the result is a failure carrying the recorded errors and
    /// `value` is discarded.
    ///
    /// # Panics
    ///
    /// Panics when no error was recorded and `value` is `None`: there is
    /// nothing to succeed with.
    #[track_caller]
    pub fn to_result<T>(&self, value: Option<T>) -> Outcome<T> {
        if let Some(failure) = Outcome::try_failures(self.errors.iter().cloned()) {
            return failure;
        }
        value.map_or_else(
            || {
                tracing::warn!("finalised a valid validation result without a success value");
                panic!("a valid validation result needs a value to succeed with")
            },
            Outcome::success,
        )
    }

    /// Short-circuits with the recorded errors, or runs `next` when valid.
    ///
    /// This is the validate-then-handle step of a request pipeline.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, ValidationsResult};
    ///
    /// let mut validations = ValidationsResult::new();
    /// validations.add_validation_error("Email.Empty", "email is required");
    ///
    /// let mut handled = false;
    /// let outcome: Outcome<u32> = validations.proceed_with(|| {
    ///     handled = true;
    ///     Outcome::success(1)
    /// });
    /// assert!(outcome.is_failure());
    /// assert!(!handled);
    /// ```
    pub fn proceed_with<T, F>(&self, next: F) -> Outcome<T>
    where
        F: FnOnce() -> Outcome<T>,
    {
        Outcome::try_failures(self.errors.iter().cloned()).unwrap_or_else(next)
    }
}

fn guard_category(error: &Error) -> Result<(), CategoryMismatch> {
    if error.is_validation() {
        return Ok(());
    }
    tracing::warn!(
        category = %error.category(),
        code = error.code(),
        "rejected non-validation error"
    );
    Err(CategoryMismatch {
        category: error.category(),
        code: error.code().to_owned(),
    })
}

impl Add for ValidationsResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs)
    }
}

impl AddAssign for ValidationsResult {
    fn add_assign(&mut self, rhs: Self) {
        self.errors.extend(rhs.errors);
    }
}

impl<C, M> Extend<(C, M)> for ValidationsResult
where
    C: Into<String>,
    M: Into<String>,
{
    fn extend<I: IntoIterator<Item = (C, M)>>(&mut self, iter: I) {
        self.errors.extend(
            iter.into_iter()
                .map(|(code, message)| Error::validation(code, message)),
        );
    }
}

impl<C, M> FromIterator<(C, M)> for ValidationsResult
where
    C: Into<String>,
    M: Into<String>,
{
    /// Converts rule-validator output into Validation errors, one per pair.
    fn from_iter<I: IntoIterator<Item = (C, M)>>(iter: I) -> Self {
        let mut validations = Self::new();
        validations.extend(iter);
        validations
    }
}

impl FromIterator<ValidationFailure> for ValidationsResult {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(Error::from).collect(),
        }
    }
}
