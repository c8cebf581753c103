//! Error categories and their integer encoding.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of an [`Error`](super::Error).
///
/// The eight named categories cover the failures handler code normally
/// reports. [`ErrorCategory::Custom`] extends the taxonomy with
/// caller-defined integer values; boundary adapters that do not recognise a
/// custom value are expected to fall back to a default representation.
///
/// Categories compare, hash and order by their integer value, so
/// `ErrorCategory::Custom(3)` and [`ErrorCategory::NotFound`] are the same
/// category. Prefer [`ErrorCategory::from_code`] when building categories
/// from raw integers; it always yields the named variant when one exists.
///
/// # Examples
///
/// ```
/// use outcome::ErrorCategory;
///
/// assert_eq!(ErrorCategory::from_code(3), ErrorCategory::NotFound);
/// assert_eq!(ErrorCategory::Custom(3), ErrorCategory::NotFound);
/// assert_eq!(ErrorCategory::from_code(42), ErrorCategory::Custom(42));
/// assert_eq!(ErrorCategory::Conflict.code(), 4);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ErrorCategory {
    /// Something went wrong that the caller did not anticipate.
    Unexpected,
    /// A generic operational failure.
    Failure,
    /// Input violated a validation rule.
    Validation,
    /// The requested entity does not exist.
    NotFound,
    /// The operation conflicts with the current state.
    Conflict,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not permitted.
    Forbidden,
    /// The request is well formed but semantically invalid.
    Invalid,
    /// Caller-defined category outside the fixed taxonomy.
    Custom(i32),
}

impl ErrorCategory {
    /// Integer value of [`ErrorCategory::Unexpected`].
    pub const UNEXPECTED: i32 = 0;
    /// Integer value of [`ErrorCategory::Failure`].
    pub const FAILURE: i32 = 1;
    /// Integer value of [`ErrorCategory::Validation`].
    pub const VALIDATION: i32 = 2;
    /// Integer value of [`ErrorCategory::NotFound`].
    pub const NOT_FOUND: i32 = 3;
    /// Integer value of [`ErrorCategory::Conflict`].
    pub const CONFLICT: i32 = 4;
    /// Integer value of [`ErrorCategory::Unauthorized`].
    pub const UNAUTHORIZED: i32 = 5;
    /// Integer value of [`ErrorCategory::Forbidden`].
    pub const FORBIDDEN: i32 = 6;
    /// Integer value of [`ErrorCategory::Invalid`].
    pub const INVALID: i32 = 7;

    /// Every named category, in integer order.
    pub const NAMED: [Self; 8] = [
        Self::Unexpected,
        Self::Failure,
        Self::Validation,
        Self::NotFound,
        Self::Conflict,
        Self::Unauthorized,
        Self::Forbidden,
        Self::Invalid,
    ];

    /// Builds a category from its integer value, preferring named variants.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            Self::UNEXPECTED => Self::Unexpected,
            Self::FAILURE => Self::Failure,
            Self::VALIDATION => Self::Validation,
            Self::NOT_FOUND => Self::NotFound,
            Self::CONFLICT => Self::Conflict,
            Self::UNAUTHORIZED => Self::Unauthorized,
            Self::FORBIDDEN => Self::Forbidden,
            Self::INVALID => Self::Invalid,
            other => Self::Custom(other),
        }
    }

    /// Returns the integer value of the category.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Unexpected => Self::UNEXPECTED,
            Self::Failure => Self::FAILURE,
            Self::Validation => Self::VALIDATION,
            Self::NotFound => Self::NOT_FOUND,
            Self::Conflict => Self::CONFLICT,
            Self::Unauthorized => Self::UNAUTHORIZED,
            Self::Forbidden => Self::FORBIDDEN,
            Self::Invalid => Self::INVALID,
            Self::Custom(code) => code,
        }
    }

    /// Returns the `PascalCase` name of a named category.
    ///
    /// Custom categories without a named counterpart return `None`.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match Self::from_code(self.code()) {
            Self::Unexpected => Some("Unexpected"),
            Self::Failure => Some("Failure"),
            Self::Validation => Some("Validation"),
            Self::NotFound => Some("NotFound"),
            Self::Conflict => Some("Conflict"),
            Self::Unauthorized => Some("Unauthorized"),
            Self::Forbidden => Some("Forbidden"),
            Self::Invalid => Some("Invalid"),
            Self::Custom(_) => None,
        }
    }

    /// Returns `true` when the integer value lies outside the fixed taxonomy.
    #[must_use]
    pub const fn is_custom(self) -> bool {
        self.name().is_none()
    }
}

impl PartialEq for ErrorCategory {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for ErrorCategory {}

impl Hash for ErrorCategory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl PartialOrd for ErrorCategory {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ErrorCategory {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.code().cmp(&other.code())
    }
}

impl From<i32> for ErrorCategory {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<ErrorCategory> for i32 {
    fn from(category: ErrorCategory) -> Self {
        category.code()
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Custom({})", self.code()),
        }
    }
}

/// Returned when a string does not name an [`ErrorCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error category '{input}'")]
pub struct ParseCategoryError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for ErrorCategory {
    type Err = ParseCategoryError;

    /// Parses a category from its name or integer value.
    ///
    /// Names are matched case-insensitively with underscores and hyphens
    /// ignored, so `NotFound`, `not_found` and `not-found` are equivalent.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Ok(code) = trimmed.parse::<i32>() {
            return Ok(Self::from_code(code));
        }
        let folded: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect();
        Self::NAMED
            .into_iter()
            .find(|category| {
                category
                    .name()
                    .is_some_and(|name| name.eq_ignore_ascii_case(&folded))
            })
            .ok_or_else(|| ParseCategoryError {
                input: input.to_owned(),
            })
    }
}
