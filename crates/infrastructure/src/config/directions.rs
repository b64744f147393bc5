//! Directions provider configuration.

use integration_directions::DirectionsConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Google Maps configuration shared by the directions client and the page bootstrap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsAppConfig {
    /// Google Maps API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Maps web services base URL (default: https://maps.googleapis.com/maps/api)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maps JavaScript SDK URL loaded by the browser
    #[serde(default = "default_maps_js_url")]
    pub maps_js_url: String,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_maps_js_url() -> String {
    "https://maps.googleapis.com/maps/api/js".to_string()
}

impl Default for DirectionsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            maps_js_url: default_maps_js_url(),
        }
    }
}

impl DirectionsAppConfig {
    /// Configuration with a key set, for tests
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Default::default()
        }
    }

    /// Get the API key (exposes secret)
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Validate this section
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` without a usable key and
    /// `ConfigError::Invalid` for a zero timeout or empty URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key().is_none() {
            return Err(ConfigError::MissingApiKey);
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "directions.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "directions.base_url must not be empty".to_string(),
            ));
        }

        if self.maps_js_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "directions.maps_js_url must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Convert to the integration crate's client configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` when no key is configured.
    pub fn to_directions_config(&self) -> Result<DirectionsConfig, ConfigError> {
        let key = self.api_key().ok_or(ConfigError::MissingApiKey)?;
        Ok(DirectionsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            ..DirectionsConfig::new(key)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_key() {
        let config = DirectionsAppConfig::default();
        assert!(config.api_key().is_none());
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.maps_js_url, "https://maps.googleapis.com/maps/api/js");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = DirectionsAppConfig::with_api_key("   ");
        assert!(config.api_key().is_none());
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = DirectionsAppConfig {
            timeout_secs: 0,
            ..DirectionsAppConfig::with_api_key("k")
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_base_url_is_invalid() {
        let config = DirectionsAppConfig {
            base_url: String::new(),
            ..DirectionsAppConfig::with_api_key("k")
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn converts_to_client_config() {
        let config = DirectionsAppConfig {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 3,
            ..DirectionsAppConfig::with_api_key("k")
        };
        let client_config = config.to_directions_config().unwrap();
        assert_eq!(client_config.base_url, "http://localhost:9000");
        assert_eq!(client_config.timeout_secs, 3);
        assert_eq!(client_config.api_key.expose_secret(), "k");
    }

    #[test]
    fn key_is_not_serialized() {
        let json = serde_json::to_string(&DirectionsAppConfig::with_api_key("secret-123")).unwrap();
        assert!(!json.contains("secret-123"));
    }
}
