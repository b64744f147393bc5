//! HTTP middleware components
//!
//! This module contains request correlation middleware.

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
