//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the directions adapter, configuration loading, page rendering
//! and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{
    API_KEY_ENV, AppConfig, ConfigError, DirectionsAppConfig, ENV_PREFIX, IndexPage, LogFormat,
    ServerConfig,
};
pub use telemetry::{LoggingError, init_logging};
pub use templates::{PageRenderer, TemplateError};
