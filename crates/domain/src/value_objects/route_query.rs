//! Origin/destination pair value object
//!
//! Both ends are free-form place descriptions ("Berlin Hbf", an address, a
//! "lat,lng" string). The only rule is that neither is blank.
//!
//! # Examples
//!
//! ```
//! use domain::RouteQuery;
//!
//! let query = RouteQuery::new("  Alexanderplatz ", "Zoo").unwrap();
//! assert_eq!(query.origin(), "Alexanderplatz");
//!
//! assert!(RouteQuery::new("   ", "Zoo").is_err());
//! ```

use std::fmt;

use serde::Serialize;

use crate::errors::DomainError;

/// A validated route request between two places
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteQuery {
    origin: String,
    destination: String,
}

impl RouteQuery {
    /// Create a route query from raw user input
    ///
    /// Surrounding whitespace is removed from both values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if either value is empty after trimming.
    pub fn new(origin: &str, destination: &str) -> Result<Self, DomainError> {
        let origin = origin.trim();
        if origin.is_empty() {
            return Err(DomainError::MissingField("origin"));
        }

        let destination = destination.trim();
        if destination.is_empty() {
            return Err(DomainError::MissingField("destination"));
        }

        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    /// The trimmed origin
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The trimmed destination
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.origin, self.destination)
    }
}
