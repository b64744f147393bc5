//! API error handling
//!
//! Every error response is `text/plain`. Upstream details are logged but
//! never returned to the browser.

use application::ApplicationError;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use domain::TravelMode;
use infrastructure::TemplateError;
use thiserror::Error;
use tracing::error;

/// Message returned when a form field is blank or missing
pub const MISSING_INPUT_MESSAGE: &str = "Please provide both origin and destination";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Origin or destination missing
    #[error("{}", MISSING_INPUT_MESSAGE)]
    BadRequest,

    /// One leg of the comparison could not be fetched
    #[error("Error fetching {} details", .0.label())]
    UpstreamFailure(TravelMode),

    /// Internal server error
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::UpstreamFailure(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            error!(%detail, "Internal error");
        }

        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(_) => Self::BadRequest,
            ApplicationError::LegFailed { mode, reason } => {
                error!(mode = %mode, %reason, "Route leg failed");
                Self::UpstreamFailure(mode)
            },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use domain::DomainError;

    use super::*;

    #[test]
    fn domain_error_is_bad_request() {
        let api: ApiError = ApplicationError::Domain(DomainError::MissingField("origin")).into();
        assert!(matches!(api, ApiError::BadRequest));
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.to_string(), MISSING_INPUT_MESSAGE);
    }

    #[test]
    fn leg_failure_names_leg_only() {
        let api: ApiError = ApplicationError::LegFailed {
            mode: TravelMode::Bicycling,
            reason: "REQUEST_DENIED: key=secret".to_string(),
        }
        .into();
        assert_eq!(api.to_string(), "Error fetching biking details");
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let api: ApiError = ApplicationError::LegFailed {
            mode: TravelMode::Driving,
            reason: "HTTP 503".to_string(),
        }
        .into();
        assert_eq!(api.to_string(), "Error fetching driving details");
    }

    #[test]
    fn other_errors_are_opaque() {
        let api: ApiError =
            ApplicationError::Configuration("base_url must not be empty".to_string()).into();
        assert_eq!(api.to_string(), "Internal server error");
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_is_plain_text() {
        let response = ApiError::BadRequest.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
