//! HTTP request handlers

pub mod bootstrap;
pub mod calculate;
pub mod health;
