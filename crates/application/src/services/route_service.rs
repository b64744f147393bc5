//! Route comparison service - Bike versus car for one origin/destination

use std::{fmt, sync::Arc};

use domain::{RouteComparison, RouteQuery, TravelDetail, TravelMode};
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::DirectionsPort};

/// Service comparing the biking and driving routes between two places
pub struct RouteComparisonService {
    directions: Arc<dyn DirectionsPort>,
}

impl fmt::Debug for RouteComparisonService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteComparisonService")
            .finish_non_exhaustive()
    }
}

impl RouteComparisonService {
    /// Create a new route comparison service
    pub fn new(directions: Arc<dyn DirectionsPort>) -> Self {
        Self { directions }
    }

    /// Fetch both routes and derive emissions and calories
    ///
    /// Bicycling is requested first. If it fails, driving is never requested
    /// and the error names the biking leg.
    #[instrument(skip(self, query), fields(origin = %query.origin(), destination = %query.destination()))]
    pub async fn compare(&self, query: &RouteQuery) -> Result<RouteComparison, ApplicationError> {
        debug!("Comparing biking and driving routes");

        let biking = self.leg(TravelMode::Bicycling, query).await?;
        let driving = self.leg(TravelMode::Driving, query).await?;

        let comparison = RouteComparison::from_details(biking, driving);

        info!(
            biking_time = %comparison.biking_time,
            driving_time = %comparison.driving_time,
            emissions_kg = comparison.emissions,
            calories = comparison.calories_burned,
            "Route comparison computed"
        );

        Ok(comparison)
    }

    /// Validate raw form values, then compare
    ///
    /// The raw values are logged before validation, so rejected requests
    /// show up in the log too.
    pub async fn compare_raw(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteComparison, ApplicationError> {
        info!(origin, destination, "Received route comparison request");

        let query = RouteQuery::new(origin, destination)?;
        self.compare(&query).await
    }

    async fn leg(
        &self,
        mode: TravelMode,
        query: &RouteQuery,
    ) -> Result<TravelDetail, ApplicationError> {
        self.directions
            .travel_detail(mode, query)
            .await
            .map_err(|e| {
                warn!(mode = %mode, error = %e, "Directions lookup failed");
                ApplicationError::LegFailed {
                    mode,
                    reason: e.to_string(),
                }
            })
    }
}
