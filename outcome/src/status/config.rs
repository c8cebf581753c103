//! Layered configuration for [`StatusMap`].

use std::collections::BTreeMap;

#[cfg(any(feature = "toml", feature = "json"))]
use figment::providers::Format;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{DEFAULT_FALLBACK_STATUS, StatusMap};
use crate::{ErrorCategory, ParseCategoryError};

/// Errors raised while loading a [`StatusMap`] from configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatusMapError {
    /// The configuration sources could not be read or deserialised.
    #[error("failed to extract status configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// A `statuses` key does not name a category.
    #[error("invalid status table key: {0}")]
    Category(#[from] ParseCategoryError),
}

impl From<figment::Error> for StatusMapError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

/// Serialisable shape of the status configuration.
///
/// ```toml
/// fallback = 500
///
/// [statuses]
/// not_found = 404
/// 42 = 418
/// ```
///
/// When `statuses` is present it replaces the default table; when absent the
/// defaults are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMapConfig {
    /// Status for unmapped categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<u16>,
    /// Category key (name or integer) to status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<BTreeMap<String, u16>>,
}

impl TryFrom<StatusMapConfig> for StatusMap {
    type Error = StatusMapError;

    fn try_from(config: StatusMapConfig) -> Result<Self, Self::Error> {
        let StatusMapConfig { fallback, statuses } = config;
        let mut map = match statuses {
            Some(entries) => {
                let mut explicit = Self::empty();
                for (key, status) in entries {
                    explicit.insert(key.parse::<ErrorCategory>()?, status);
                }
                explicit
            }
            None => Self::default(),
        };
        map.fallback = fallback.unwrap_or(DEFAULT_FALLBACK_STATUS);
        Ok(map)
    }
}

impl StatusMap {
    /// Extracts a table from an assembled [`Figment`].
    ///
    /// # Errors
    ///
    /// Returns [`StatusMapError::Extract`] when the sources cannot be
    /// deserialised and [`StatusMapError::Category`] for unknown category
    /// keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use figment::{Figment, providers::Serialized};
    /// use outcome::{ErrorCategory, StatusMap, StatusMapConfig};
    ///
    /// let config = StatusMapConfig { fallback: Some(503), statuses: None };
    /// let statuses = StatusMap::load(&Figment::from(Serialized::defaults(config)))?;
    /// assert_eq!(statuses.resolve(ErrorCategory::Conflict), 409);
    /// assert_eq!(statuses.fallback(), 503);
    /// # Ok::<_, outcome::StatusMapError>(())
    /// ```
    pub fn load(figment: &Figment) -> Result<Self, StatusMapError> {
        let config: StatusMapConfig = figment.extract()?;
        Self::try_from(config)
    }

    /// Loads a table from environment variables sharing `prefix`.
    ///
    /// `PREFIX_FALLBACK` sets the fallback and `PREFIX_STATUSES__<CATEGORY>`
    /// sets individual entries.
    ///
    /// # Errors
    ///
    /// See [`StatusMap::load`].
    pub fn from_env(prefix: &str) -> Result<Self, StatusMapError> {
        let figment = Figment::from(Serialized::defaults(StatusMapConfig::default()))
            .merge(Env::prefixed(prefix).split("__"));
        Self::load(&figment)
    }

    /// Parses a table from a TOML document.
    ///
    /// # Errors
    ///
    /// See [`StatusMap::load`].
    #[cfg(feature = "toml")]
    pub fn from_toml_str(document: &str) -> Result<Self, StatusMapError> {
        Self::load(&Figment::from(figment::providers::Toml::string(document)))
    }

    /// Parses a table from a JSON document.
    ///
    /// # Errors
    ///
    /// See [`StatusMap::load`].
    #[cfg(feature = "json")]
    pub fn from_json_str(document: &str) -> Result<Self, StatusMapError> {
        Self::load(&Figment::from(figment::providers::Json::string(document)))
    }
}
