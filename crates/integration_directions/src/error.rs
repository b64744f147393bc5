//! Directions error types

use thiserror::Error;

/// Errors that can occur during a directions lookup
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// The HTTP exchange could not complete (connect failure, body read failure)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The provider answered with a non-200 HTTP status
    #[error("Unexpected HTTP status {status}")]
    UpstreamStatus {
        /// HTTP status code
        status: u16,
    },

    /// Body is not valid JSON or does not match the response schema
    #[error("Decode error: {0}")]
    Decode(String),

    /// The provider reported a non-OK status (e.g. `ZERO_RESULTS`, `REQUEST_DENIED`)
    #[error("Provider returned {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Provider {
        /// Top-level `status` value
        status: String,
        /// Provider `error_message`, if any
        message: Option<String>,
    },

    /// No route, no leg, or the leg lacks duration/distance
    #[error("No valid route found")]
    NoRoute,
}

impl DirectionsError {
    /// Returns true if the failure happened before a response was read
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout { .. })
    }
}
