//! Axum-based HTTP server implementation for the translation service.
//!
//! This module is responsible for setting up the HTTP server, configuring routes,
//! and handling incoming translation requests. Requests flow through validation
//! into the two-step translation pipeline.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual API endpoints (translate, health, metrics).
//! - `middleware`: Custom tower/axum middleware for request ID tracking and metrics.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
