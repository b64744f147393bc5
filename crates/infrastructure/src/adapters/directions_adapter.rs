//! Directions adapter - Implements DirectionsPort using integration_directions

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::DirectionsPort;
use async_trait::async_trait;
use domain::{RouteQuery, TravelDetail, TravelMode};
use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, GoogleDirectionsClient,
};
use tracing::{debug, instrument, warn};

/// Adapter for route lookups through a directions client
pub struct DirectionsAdapter {
    client: Arc<dyn DirectionsClient>,
}

impl std::fmt::Debug for DirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsAdapter")
            .field("client", &"dyn DirectionsClient")
            .finish()
    }
}

impl DirectionsAdapter {
    /// Wrap an existing directions client
    pub fn new(client: Arc<dyn DirectionsClient>) -> Self {
        Self { client }
    }

    /// Build an adapter around a Google Directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &DirectionsConfig) -> Result<Self, ApplicationError> {
        let client = GoogleDirectionsClient::new(config).map_err(|e| {
            ApplicationError::Configuration(format!("Failed to build directions client: {e}"))
        })?;
        Ok(Self::new(Arc::new(client)))
    }

    fn map_error(mode: TravelMode, err: &DirectionsError) -> ApplicationError {
        warn!(
            mode = %mode,
            transport = err.is_transport(),
            error = %err,
            "Directions provider call failed"
        );
        ApplicationError::ExternalService(format!("{mode} directions failed: {err}"))
    }
}

#[async_trait]
impl DirectionsPort for DirectionsAdapter {
    #[instrument(skip_all, fields(mode = %mode))]
    async fn travel_detail(
        &self,
        mode: TravelMode,
        query: &RouteQuery,
    ) -> Result<TravelDetail, ApplicationError> {
        let detail = self
            .client
            .fetch(mode, query.origin(), query.destination())
            .await
            .map_err(|e| Self::map_error(mode, &e))?;

        debug!(
            duration = %detail.duration_text,
            distance_km = detail.distance_km,
            "Travel detail received"
        );
        Ok(detail)
    }
}
