//! Application configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from optional TOML
//! files plus `ALLEGIANT__`-prefixed environment variables. Every field has
//! a default, so an empty source produces a usable configuration.

pub mod logging;
pub mod versioning;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::versioning::VersioningConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Versioning engine settings.
    #[serde(default)]
    pub versioning: VersioningConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment.
    ///
    /// Merges `config/default`, the `config/{env}` overlay, and environment
    /// variables such as `ALLEGIANT__VERSIONING__ARRAY_POLICY=atomic`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ALLEGIANT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::versioning::ArrayPolicy;
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = AppConfig::from_toml("").expect("empty config");
        assert_eq!(config.versioning.system_author, "System");
        assert_eq!(config.versioning.array_policy, ArrayPolicy::Length);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_overrides_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            [versioning]
            system_author = "Allegiant Bot"
            array_policy = "atomic"

            [logging]
            format = "json"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.versioning.system_author, "Allegiant Bot");
        assert_eq!(config.versioning.array_policy, ArrayPolicy::Atomic);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_array_policy_is_rejected() {
        let err = AppConfig::from_toml("[versioning]\narray_policy = \"deep\"").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
