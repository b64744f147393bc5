//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required input field is missing or blank after trimming
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
