//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server, logging and landing page settings
//! - `directions`: Google Maps credential and endpoints
//!
//! Sources are layered as defaults, then an optional `config.toml` in the
//! working directory, then `GREENROUTE_*` environment variables using `__`
//! between nested keys (e.g. `GREENROUTE_SERVER__PORT=8080`). The API key is
//! finally taken from `GOOGLE_MAPS_API_KEY` when that variable is set.

mod directions;
mod server;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use directions::DirectionsAppConfig;
pub use server::{IndexPage, LogFormat, ServerConfig};

/// Environment variable prefix for layered settings
pub const ENV_PREFIX: &str = "GREENROUTE";

/// Environment variable holding the Google Maps API key
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// No Google Maps API key was configured
    #[error("Missing Google Maps API key (set {API_KEY_ENV} or directions.api_key)")]
    MissingApiKey,

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Directions provider configuration
    #[serde(default)]
    pub directions: DirectionsAppConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed. Missing values are not
    /// an error here; call [`AppConfig::validate`] afterwards.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::builder()?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        app_config.apply_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(app_config)
    }

    /// Load configuration from a TOML document on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let config = Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("directions.timeout_secs", 10)?)
    }

    /// Override the API key with a value from the process environment
    ///
    /// Blank values are ignored so an empty variable does not clobber a key
    /// from `config.toml`.
    pub fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using Google Maps API key from {API_KEY_ENV}");
            self.directions.api_key = Some(SecretString::from(key));
        }
    }

    /// Validate the whole configuration
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.directions.validate()?;

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "server.host must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Configuration suitable for tests (key set, defaults elsewhere)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig::default(),
            directions: DirectionsAppConfig::with_api_key("test-key"),
        }
    }
}
