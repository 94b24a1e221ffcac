//! Utility functions and helpers for the translation service.
//!
//! This module provides cross-cutting concerns like structured logging and
//! credential sanitization for log output.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization with security filters.

pub mod logging;

pub use logging::sanitize;
