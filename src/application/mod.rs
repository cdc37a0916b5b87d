//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::rule_service::RuleService`] - Rule CRUD with input validation
//! - [`services::status_service::StatusService`] - Concurrent domain status checks
//! - [`services::auth_service::AuthService`] - Optional bearer gate for rule mutations

pub mod services;
