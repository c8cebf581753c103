//! Test helpers shared across crates.
//!
//! The helpers return `anyhow::Result` so behavioural steps and integration
//! tests can propagate assertion failures with `?`.

pub mod assertions;
pub mod env;
pub mod text;

pub use assertions::{ensure_category, ensure_codes, expect_failure, expect_success};
