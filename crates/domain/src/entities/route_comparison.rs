//! Bike-versus-car comparison returned to the browser

use serde::{Deserialize, Serialize};

use super::TravelDetail;
use crate::metrics::{calories_burned, emissions_kg};

/// Result of comparing the biking and driving routes for one query
///
/// Serialized with the exact keys the web page reads:
/// `bikingTime`, `drivingTime`, `emissions`, `caloriesBurned`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteComparison {
    /// Provider duration text for the biking route
    pub biking_time: String,
    /// Provider duration text for the driving route
    pub driving_time: String,
    /// kg CO₂ emitted by driving
    pub emissions: f64,
    /// Calories burned by biking
    pub calories_burned: f64,
}

impl RouteComparison {
    /// Derive the comparison from both modes' travel details
    ///
    /// Emissions come from the driving distance, calories from the biking distance.
    #[must_use]
    pub fn from_details(biking: TravelDetail, driving: TravelDetail) -> Self {
        Self {
            emissions: emissions_kg(driving.distance_km),
            calories_burned: calories_burned(biking.distance_km),
            biking_time: biking.duration_text,
            driving_time: driving.duration_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_use_matching_modes() {
        let biking = TravelDetail::from_meters("20 mins", 5000.0);
        let driving = TravelDetail::from_meters("15 mins", 12000.0);

        let comparison = RouteComparison::from_details(biking, driving);

        assert_eq!(comparison.biking_time, "20 mins");
        assert_eq!(comparison.driving_time, "15 mins");
        assert!((comparison.emissions - 2.52).abs() < 1e-9);
        assert!((comparison.calories_burned - 250.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_with_web_page_keys() {
        let comparison = RouteComparison {
            biking_time: "20 mins".to_string(),
            driving_time: "15 mins".to_string(),
            emissions: 2.52,
            calories_burned: 250.0,
        };
        let value = serde_json::to_value(&comparison).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 4);
        assert_eq!(value["bikingTime"], "20 mins");
        assert_eq!(value["drivingTime"], "15 mins");
        assert!(value["emissions"].is_number());
        assert!(value["caloriesBurned"].is_number());
    }
}
