//! Helpers for loading status tables from a jailed environment.
//!
//! # Examples
//!
//! ```
//! use outcome::ErrorCategory;
//! use outcome_test_helpers::env::statuses_from_env;
//!
//! # fn main() -> anyhow::Result<()> {
//! let statuses = statuses_from_env("APP_", &[("APP_STATUSES__CONFLICT", "412")])?;
//! assert_eq!(statuses.resolve(ErrorCategory::Conflict), 412);
//! # Ok(())
//! # }
//! ```

use anyhow::{Result, anyhow};
use outcome::StatusMap;

/// Sets `vars` inside a [`figment::Jail`] and loads a [`StatusMap`] from the
/// variables sharing `prefix`.
///
/// The jail restores the environment once loading completes.
///
/// # Errors
///
/// Returns an error when the jail fails or the variables do not describe a
/// valid table.
pub fn statuses_from_env(prefix: &str, vars: &[(&str, &str)]) -> Result<StatusMap> {
    let mut loaded = None;
    figment::Jail::try_with(|jail| {
        for (key, value) in vars {
            jail.set_env(key, value);
        }
        loaded = Some(StatusMap::from_env(prefix).map_err(|e| e.to_string())?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    loaded.ok_or_else(|| anyhow!("jail closure did not load a status table"))
}
