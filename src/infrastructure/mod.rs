//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Rule storage (PostgreSQL and in-process)
//! - [`http`] - Outbound HTTP status probes

pub mod http;
pub mod persistence;
