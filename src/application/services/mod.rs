//! Business logic services for the application layer.

pub mod auth_service;
pub mod rule_service;
pub mod status_service;

pub use auth_service::AuthService;
pub use rule_service::RuleService;
pub use status_service::{DomainCheck, StatusRow, StatusService};
