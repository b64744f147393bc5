//! Directions integration for GreenRoute
//!
//! Looks up bicycling and driving routes through the
//! [Google Directions API](https://developers.google.com/maps/documentation/directions).
//!
//! # Architecture
//!
//! [`DirectionsClient`] defines the single lookup operation, implemented by
//! [`GoogleDirectionsClient`]. Responses are decoded once into the typed
//! [`DirectionsResponse`] schema and reduced to a [`domain::TravelDetail`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::TravelMode;
//! use integration_directions::{DirectionsClient, DirectionsConfig, GoogleDirectionsClient};
//!
//! let config = DirectionsConfig::new("my-api-key");
//! let client = GoogleDirectionsClient::new(&config)?;
//!
//! let detail = client
//!     .fetch(TravelMode::Bicycling, "Alexanderplatz, Berlin", "Zoo, Berlin")
//!     .await?;
//! println!("{} ({} km)", detail.duration_text, detail.distance_km);
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DirectionsClient, GoogleDirectionsClient};
pub use config::DirectionsConfig;
pub use error::DirectionsError;
pub use models::{DirectionsResponse, Leg, LegDistance, LegDuration, MISSING_STATUS, Route};
