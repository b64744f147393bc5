//! Duration and distance of one travel mode's route

use serde::{Deserialize, Serialize};

/// First-leg summary returned by the directions provider for one mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDetail {
    /// Provider-formatted duration, kept verbatim (e.g. "15 mins")
    pub duration_text: String,
    /// Route distance in kilometers
    pub distance_km: f64,
}

impl TravelDetail {
    /// Build a travel detail from a provider distance in meters
    #[must_use]
    pub fn from_meters(duration_text: impl Into<String>, distance_meters: f64) -> Self {
        Self {
            duration_text: duration_text.into(),
            distance_km: distance_meters / 1000.0,
        }
    }
}
