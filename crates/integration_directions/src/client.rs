//! Google Directions client
//!
//! One `GET {base_url}/directions/json` per lookup, single attempt, no retry.

use std::time::Duration;

use async_trait::async_trait;
use domain::{TravelDetail, TravelMode};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::models::DirectionsResponse;

/// Trait for directions service clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Look up the first route's first leg for one travel mode
    async fn fetch(
        &self,
        mode: TravelMode,
        origin: &str,
        destination: &str,
    ) -> Result<TravelDetail, DirectionsError>;
}

/// Directions client backed by the Google Maps web services
#[derive(Debug)]
pub struct GoogleDirectionsClient {
    client: Client,
    config: DirectionsConfig,
}

impl GoogleDirectionsClient {
    /// Create a new Google Directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DirectionsConfig) -> Result<Self, DirectionsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("GreenRoute/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DirectionsError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// The request URL carries the API key, so it is stripped before the
    /// error is rendered.
    fn map_send_error(&self, e: reqwest::Error) -> DirectionsError {
        if e.is_timeout() {
            DirectionsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            DirectionsError::Transport(e.without_url().to_string())
        }
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip_all, fields(mode = %mode))]
    async fn fetch(
        &self,
        mode: TravelMode,
        origin: &str,
        destination: &str,
    ) -> Result<TravelDetail, DirectionsError> {
        let url = self.config.endpoint();

        let params = [
            ("origin", origin),
            ("destination", destination),
            ("mode", mode.as_str()),
            ("key", self.config.api_key.expose_secret()),
        ];

        debug!(?url, origin, destination, "Requesting directions");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "Directions request failed");
            return Err(DirectionsError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let detail = DirectionsResponse::from_json(&body)?.first_leg()?;

        debug!(
            duration = %detail.duration_text,
            distance_km = detail.distance_km,
            "Directions found"
        );
        Ok(detail)
    }
}
