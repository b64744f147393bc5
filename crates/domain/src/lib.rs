//! Domain layer for GreenRoute
//!
//! Contains the route query, travel modes, per-mode travel details, the
//! comparison payload, and the emission/calorie metrics.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod metrics;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use metrics::{CALORIES_PER_KM, CO2_KG_PER_KM, calories_burned, emissions_kg};
pub use value_objects::*;
