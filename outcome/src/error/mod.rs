//! Error taxonomy: categories, the error value, and non-empty error lists.

mod category;
mod conversions;
pub mod defaults;
mod list;
mod types;

pub use category::{ErrorCategory, ParseCategoryError};
pub use list::{EmptyErrorList, ErrorList};
pub use types::Error;

#[cfg(test)]
mod tests;
