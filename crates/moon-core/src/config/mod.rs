//! Configuration schemas shared by every Moon service.
//!
//! All structs deserialize through the `config` crate. Each sub-module
//! represents one logical section; every field carries a default so a
//! service can start with no configuration file at all.

pub mod auth;
pub mod logging;
pub mod messaging;
pub mod publisher;

use serde::{Deserialize, Serialize};

pub use self::auth::AuthConfig;
pub use self::logging::{LogFormat, LoggingConfig};
pub use self::messaging::{MessagingBackend, MessagingConfig};
pub use self::publisher::PublisherConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root configuration consumed by a Moon service.
///
/// Top-level deserialization target for the merged configuration files
/// (`config/default` + environment overlay) and `MOON__` environment
/// variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoonConfig {
    /// Identity of the hosting service.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Message bus connection settings.
    #[serde(default)]
    pub messaging: MessagingConfig,
    /// Publisher retry settings.
    #[serde(default)]
    pub publisher: PublisherConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Bearer token verification.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Identity of the service embedding moon-lib.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, used in storage paths and log fields.
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

impl MoonConfig {
    /// Load configuration for the given environment.
    ///
    /// Merges `config/default`, `config/{env}` and environment variables
    /// prefixed with `MOON__` (nested keys separated by `__`).
    pub fn load(env: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("MOON")
                    .prefix_separator("__")
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
    pub fn from_toml(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn default_service_name() -> String {
    "moon-service".to_string()
}
