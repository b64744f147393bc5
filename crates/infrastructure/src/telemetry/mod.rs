//! Logging infrastructure
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a text or
//! JSON formatting layer.

mod logging;

pub use logging::{LoggingError, build_filter, init_logging};
