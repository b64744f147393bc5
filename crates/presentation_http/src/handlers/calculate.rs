//! Route comparison handler

use axum::{
    Json,
    extract::{Form, State, rejection::FormRejection},
};
use domain::RouteComparison;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Form fields posted by the landing page
///
/// Missing fields deserialize as empty strings and are rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateForm {
    /// Start of the trip
    #[serde(default)]
    pub origin: String,
    /// End of the trip
    #[serde(default)]
    pub destination: String,
}

/// Compare biking and driving between the posted origin and destination
#[instrument(skip(state, form))]
pub async fn calculate(
    State(state): State<AppState>,
    form: Result<Form<CalculateForm>, FormRejection>,
) -> Result<Json<RouteComparison>, ApiError> {
    let form = form.map_or_else(
        |rejection| {
            debug!(error = %rejection, "Unreadable form body, treating fields as empty");
            CalculateForm::default()
        },
        |Form(form)| form,
    );

    let comparison = state
        .route_service
        .compare_raw(&form.origin, &form.destination)
        .await?;

    Ok(Json(comparison))
}
