#![deny(missing_docs)]

//! Core library for the cookbook service.

/// HTTP routing and REST handlers.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// Name normalization, entry registry, and recipe resolution.
pub mod cookbook;
/// Structured logging and tracing setup.
pub mod logging;
/// Model Context Protocol server implementation.
pub mod mcp;
/// Insertion and resolution counters.
pub mod metrics;
