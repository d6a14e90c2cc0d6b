//! HTTP service for running auditable lottery draws.
//!
//! The binary wires [`config::ServerConfig`] into an axum router built by
//! [`api::create_router`]. The library half exists so integration tests can
//! drive the router directly.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
