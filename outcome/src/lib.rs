//! Explicit success-or-errors outcomes for application services.
//!
//! Operations return an [`Outcome`] instead of unwinding: either a success
//! value or a non-empty, ordered list of categorised [`Error`]s. Dependent
//! steps are chained with [`Outcome::merge`] (or [`Outcome::merge_async`]),
//! which stops at the first failure, while independent input checks are
//! accumulated with [`ValidationsResult`] so every violation is reported at
//! once.
//!
//! Boundary adapters translate failures into transport responses through an
//! explicit [`StatusMap`], optionally loaded from configuration.
//!
//! ```
//! use outcome::{Error, Outcome, StatusMap, ValidationsResult};
//!
//! fn register(email: &str) -> Outcome<String> {
//!     let mut validations = ValidationsResult::new();
//!     validations.add_on_failure(
//!         || !email.is_empty(),
//!         Error::validation("Email.Empty", "email is required"),
//!     );
//!     validations.proceed_with(|| Outcome::success(email.to_owned()))
//! }
//!
//! let statuses = StatusMap::default();
//! assert_eq!(statuses.resolve_errors(register("").errors()), 400);
//! assert!(register("ada@example.com").is_success());
//! ```

mod async_ext;
mod combinators;
mod error;
mod optional;
mod outcome;
mod status;
mod validation;

pub use async_ext::{OutcomeFutureExt, join_outcome};
pub use error::{
    EmptyErrorList, Error, ErrorCategory, ErrorList, ParseCategoryError, defaults,
};
pub use optional::Optional;
pub use outcome::{IntoOutcome, Outcome, UnitDisplay};
pub use status::{DEFAULT_FALLBACK_STATUS, StatusMap, StatusMapConfig, StatusMapError};
pub use validation::{CategoryMismatch, ValidationFailure, ValidationsResult};
