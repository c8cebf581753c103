//! Assertions over [`Outcome`] values.
//!
//! # Examples
//!
//! ```
//! use outcome::{Error, Outcome};
//! use outcome_test_helpers::{ensure_codes, expect_failure, expect_success};
//!
//! # fn main() -> anyhow::Result<()> {
//! assert_eq!(expect_success(Outcome::success(3))?, 3);
//!
//! let failed: Outcome<u8> = Error::not_found("Member.NotFound", "missing").into();
//! let errors = expect_failure(&failed)?;
//! ensure_codes(errors, &["Member.NotFound"])?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Result, anyhow, ensure};
use outcome::{Error, ErrorCategory, Outcome};

/// Takes the success value, reporting the errors of a failure.
///
/// # Errors
///
/// Returns an error listing every error when `outcome` is a failure.
pub fn expect_success<T>(outcome: Outcome<T>) -> Result<T> {
    outcome
        .into_result()
        .map_err(|errors| anyhow!("expected success, got errors:\n{errors}"))
}

/// Borrows the errors of a failure.
///
/// # Errors
///
/// Returns an error when `outcome` succeeded.
pub fn expect_failure<T>(outcome: &Outcome<T>) -> Result<&[Error]> {
    ensure!(outcome.is_failure(), "expected failure, got success");
    Ok(outcome.errors())
}

/// Checks that `errors` carry exactly `expected` codes, in order.
///
/// # Errors
///
/// Returns an error describing both code lists when they differ.
pub fn ensure_codes(errors: &[Error], expected: &[&str]) -> Result<()> {
    let actual: Vec<&str> = errors.iter().map(Error::code).collect();
    ensure!(
        actual == expected,
        "expected codes {expected:?}, got {actual:?}"
    );
    Ok(())
}

/// Checks that every error belongs to `category`.
///
/// # Errors
///
/// Returns an error naming the first error in another category.
pub fn ensure_category(errors: &[Error], category: ErrorCategory) -> Result<()> {
    if let Some(stray) = errors.iter().find(|e| e.category() != category) {
        return Err(anyhow!("expected only {category} errors, found {stray}"));
    }
    Ok(())
}
