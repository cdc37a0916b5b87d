//! HTTP middleware for request processing and protection.
//!
//! Provides the admin bearer gate, rate limiting, CORS and request tracing.

pub mod auth;
pub mod cors;
pub mod rate_limit;
pub mod tracing;
