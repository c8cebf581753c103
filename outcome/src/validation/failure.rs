//! Boundary type for output produced by external rule validators.

use serde::{Deserialize, Serialize};

use crate::Error;

/// One rule violation reported by an external validator.
///
/// Converting it into an [`Error`] yields a Validation error whose code is the
/// rule's code when present and the property name otherwise.
///
/// # Examples
///
/// ```
/// use outcome::{Error, ValidationFailure};
///
/// let coded = ValidationFailure::new("Email", "email is required").with_code("Email.Empty");
/// assert_eq!(Error::from(coded).code(), "Email.Empty");
///
/// let uncoded = ValidationFailure::new("LastName", "last name is required");
/// assert_eq!(Error::from(uncoded).code(), "LastName");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    message: String,
}

impl ValidationFailure {
    /// Creates an uncoded failure for `property`.
    #[must_use]
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            code: None,
            message: message.into(),
        }
    }

    /// Attaches the validator's rule code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Name of the offending property.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Rule code, when the validator supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Human-readable description of the violation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationFailure> for Error {
    fn from(failure: ValidationFailure) -> Self {
        let ValidationFailure {
            property,
            code,
            message,
        } = failure;
        Self::validation(code.unwrap_or(property), message)
    }
}
