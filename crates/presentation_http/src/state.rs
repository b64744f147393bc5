//! Application state shared across handlers

use std::sync::Arc;

use application::{ApplicationError, RouteComparisonService, ports::DirectionsPort};
use infrastructure::{AppConfig, ConfigError, DirectionsAdapter, IndexPage, PageRenderer, TemplateError};
use thiserror::Error;

/// Errors that prevent the state from being assembled at startup
#[derive(Debug, Error)]
pub enum StartupError {
    /// Configuration is incomplete or invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Page templates failed to compile
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The directions client could not be built
    #[error(transparent)]
    Directions(#[from] ApplicationError),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Bike-versus-car comparison use case
    pub route_service: Arc<RouteComparisonService>,
    /// Landing page and SDK loader renderer
    pub pages: Arc<PageRenderer>,
    /// Which landing page variant `/` serves
    pub index_page: IndexPage,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("index_page", &self.index_page)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Assemble state from an already-built directions port
    ///
    /// # Errors
    ///
    /// Returns an error if the page templates cannot be prepared.
    pub fn with_directions(
        directions: Arc<dyn DirectionsPort>,
        config: &AppConfig,
    ) -> Result<Self, StartupError> {
        Ok(Self {
            route_service: Arc::new(RouteComparisonService::new(directions)),
            pages: Arc::new(PageRenderer::new(&config.directions)?),
            index_page: config.server.index_page,
        })
    }

    /// Assemble state wired to the Google Directions API
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or a component fails to build.
    pub fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let client_config = config.directions.to_directions_config()?;
        let adapter = DirectionsAdapter::from_config(&client_config)?;
        Self::with_directions(Arc::new(adapter), config)
    }
}
