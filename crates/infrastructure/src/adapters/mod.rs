//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod directions_adapter;

pub use directions_adapter::DirectionsAdapter;
