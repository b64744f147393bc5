//! Travel mode requested from the directions provider

use std::fmt;

use serde::{Deserialize, Serialize};

/// Travel mode for a directions lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// Bicycle route
    Bicycling,
    /// Car route
    Driving,
}

impl TravelMode {
    /// Modes in the order a comparison requests them
    pub const ALL: [Self; 2] = [Self::Bicycling, Self::Driving];

    /// Value sent as the provider's `mode` query parameter
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bicycling => "bicycling",
            Self::Driving => "driving",
        }
    }

    /// Short human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bicycling => "biking",
            Self::Driving => "driving",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
