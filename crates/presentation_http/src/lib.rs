//! GreenRoute HTTP presentation layer
//!
//! Serves the landing page, the Maps SDK loader and the bike-versus-car
//! comparison endpoint.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer};
pub use routes::{create_app, create_router};
pub use server::{ShutdownOutcome, serve};
pub use state::{AppState, StartupError};
