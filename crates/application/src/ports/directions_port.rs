//! Directions service port
//!
//! Defines the interface for looking up one travel mode's route between two
//! places. Adapters in the infrastructure layer implement this port using a
//! directions API.

use async_trait::async_trait;
use domain::{RouteQuery, TravelDetail, TravelMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for route lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Fetch duration and distance of the first route's first leg for `mode`
    ///
    /// Implementations make a single attempt; failures are reported as
    /// `ApplicationError::ExternalService`.
    async fn travel_detail(
        &self,
        mode: TravelMode,
        query: &RouteQuery,
    ) -> Result<TravelDetail, ApplicationError>;
}
