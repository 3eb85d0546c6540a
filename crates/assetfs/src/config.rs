//! Configuration for an asset filesystem.
//!
//! # Examples
//!
//! ```
//! use assetfs::AssetFsConfig;
//!
//! // Defaults: no prefix, fixed timestamps
//! let config = AssetFsConfig::default();
//! assert!(config.prefix.is_empty());
//! assert!(!config.debug);
//!
//! let custom = AssetFsConfig::builder()
//!     .prefix("static")
//!     .debug(true)
//!     .build();
//! assert_eq!(custom.prefix, "static");
//! assert!(custom.debug);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options recognized by [`AssetFs`](crate::AssetFs).
///
/// Deserializable with every field optional, so it can be embedded in a
/// larger application config file.
///
/// # Examples
///
/// ```
/// use assetfs::AssetFsConfig;
///
/// let config: AssetFsConfig = serde_json::from_str(r#"{"prefix": "public"}"#).unwrap();
/// assert_eq!(config.prefix, "public");
/// assert!(!config.debug);
/// assert!(config.mod_time.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetFsConfig {
    /// Prepended to every requested path before lookup.
    ///
    /// Scopes the filesystem to one subtree of the embedded assets.
    /// Default: empty (asset root)
    pub prefix: String,

    /// Report the current time as every opened file's modification time.
    ///
    /// Defeats HTTP caching during development. Served content is
    /// unaffected.
    /// Default: false
    pub debug: bool,

    /// Fixed modification time reported for all entries.
    ///
    /// If `None`, the time the filesystem is constructed is used.
    /// Default: None
    pub mod_time: Option<DateTime<Utc>>,
}

impl AssetFsConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> AssetFsConfigBuilder {
        AssetFsConfigBuilder::new()
    }
}

/// Builder for [`AssetFsConfig`].
///
/// # Examples
///
/// ```
/// use assetfs::AssetFsConfig;
/// use chrono::{TimeZone, Utc};
///
/// let built_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
/// let config = AssetFsConfig::builder()
///     .prefix("assets")
///     .mod_time(built_at)
///     .build();
///
/// assert_eq!(config.mod_time, Some(built_at));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetFsConfigBuilder {
    config: AssetFsConfig,
}

impl AssetFsConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookup prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Enables or disables live modification times.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Pins the fixed modification time.
    #[must_use]
    pub fn mod_time(mut self, mod_time: DateTime<Utc>) -> Self {
        self.config.mod_time = Some(mod_time);
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> AssetFsConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AssetFsConfig::default();
        assert_eq!(config.prefix, "");
        assert!(!config.debug);
        assert!(config.mod_time.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AssetFsConfig::builder().prefix("static").debug(true).build();
        assert_eq!(config.prefix, "static");
        assert!(config.debug);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AssetFsConfig = serde_json::from_str(r#"{"debug": true}"#).unwrap();
        assert!(config.debug);
        assert_eq!(config.prefix, "");
    }

    #[test]
    fn test_serialize_round_trip_mod_time() {
        let config: AssetFsConfig =
            serde_json::from_str(r#"{"prefix": "p", "mod_time": "2024-06-01T00:00:00Z"}"#)
                .unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mod_time"], "2024-06-01T00:00:00Z");
        assert_eq!(json["prefix"], "p");
    }
}
