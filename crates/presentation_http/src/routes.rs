//! Route definitions

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Upper bound for a posted form body
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Browser bootstrap
        .route("/", get(handlers::bootstrap::index))
        .route("/google-maps-api", get(handlers::bootstrap::maps_loader))
        // Route comparison
        .route("/calculate", post(handlers::calculate::calculate))
        // Liveness
        .route("/health", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}

/// Router with the middleware stack applied
///
/// Order matters: the last layer added is the outermost.
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    create_router(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(RequestIdLayer)
}

/// CORS policy: any origin unless `allowed_origins` is set
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let exposed = HeaderName::from_static("x-request-id");

    if server.cors_allows_any() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers([exposed]);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .expose_headers([exposed])
}
