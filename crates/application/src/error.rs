//! Application-level errors

use domain::{DomainError, TravelMode};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// One leg of a route comparison could not be fetched
    #[error("Error fetching {} details: {reason}", .mode.label())]
    LegFailed {
        /// Mode whose lookup failed
        mode: TravelMode,
        /// Underlying failure, for logs only
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::MissingField("origin").into();
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert_eq!(err.to_string(), "Missing required field: origin");
    }

    #[test]
    fn leg_failed_names_the_mode() {
        let err = ApplicationError::LegFailed {
            mode: TravelMode::Bicycling,
            reason: "HTTP 503".to_string(),
        };
        assert_eq!(err.to_string(), "Error fetching biking details: HTTP 503");
    }

    #[test]
    fn external_service_error_message() {
        let err = ApplicationError::ExternalService("driving directions failed".to_string());
        assert_eq!(err.to_string(), "External service error: driving directions failed");
    }
}
