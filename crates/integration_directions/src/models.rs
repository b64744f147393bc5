//! Typed Directions API response schema
//!
//! Only the fields GreenRoute reads are modelled. Missing collections default
//! to empty and missing leg fields to `None`, so a single decode step accepts
//! every well-formed provider answer and [`DirectionsResponse::first_leg`]
//! decides whether it is usable.

use domain::TravelDetail;
use serde::{Deserialize, Deserializer};

use crate::error::DirectionsError;

/// Top-level Directions API response
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Provider status, `"OK"` on success
    #[serde(default, deserialize_with = "status_text")]
    pub status: Option<String>,

    /// Human-readable detail accompanying a non-OK status
    #[serde(default)]
    pub error_message: Option<String>,

    /// Candidate routes, best first
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// One candidate route
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// Point-to-point segments of the route
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// One leg of a route
#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    /// Travel time of the leg
    #[serde(default)]
    pub duration: Option<LegDuration>,

    /// Length of the leg
    #[serde(default)]
    pub distance: Option<LegDistance>,
}

/// Leg duration
#[derive(Debug, Clone, Deserialize)]
pub struct LegDuration {
    /// Provider-formatted text, e.g. `"15 mins"`
    #[serde(default)]
    pub text: Option<String>,
}

/// Leg distance
#[derive(Debug, Clone, Deserialize)]
pub struct LegDistance {
    /// Distance in meters
    #[serde(default)]
    pub value: Option<f64>,
}

/// Status reported in place of an absent or null `status` field
pub const MISSING_STATUS: &str = "NO_STATUS";

/// Accept any JSON value for `status`; non-strings keep their JSON form.
fn status_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl DirectionsResponse {
    /// Decode a response body
    ///
    /// # Errors
    ///
    /// Returns `DirectionsError::Decode` if the body is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(body: &str) -> Result<Self, DirectionsError> {
        serde_json::from_str(body).map_err(|e| DirectionsError::Decode(e.to_string()))
    }

    /// Whether the provider reported success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("OK")
    }

    /// Reduce the response to the first route's first leg
    ///
    /// # Errors
    ///
    /// Returns `DirectionsError::Provider` for a non-OK or missing status and
    /// `DirectionsError::NoRoute` when the leg or its fields are missing.
    pub fn first_leg(self) -> Result<TravelDetail, DirectionsError> {
        if !self.is_ok() {
            return Err(DirectionsError::Provider {
                status: self
                    .status
                    .unwrap_or_else(|| MISSING_STATUS.to_string()),
                message: self.error_message,
            });
        }

        let leg = self
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.legs.into_iter().next())
            .ok_or(DirectionsError::NoRoute)?;

        let text = leg
            .duration
            .and_then(|d| d.text)
            .ok_or(DirectionsError::NoRoute)?;
        let meters = leg
            .distance
            .and_then(|d| d.value)
            .ok_or(DirectionsError::NoRoute)?;

        Ok(TravelDetail::from_meters(text, meters))
    }
}
