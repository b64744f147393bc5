//! Application layer - Use cases and orchestration
//!
//! Defines the directions port and the route comparison use case that
//! ties provider lookups to the domain metrics.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
