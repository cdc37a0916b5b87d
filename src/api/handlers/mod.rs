//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod rules;
pub mod status;

pub use health::health_handler;
pub use rules::{
    create_rule_handler, delete_rule_handler, list_rules_handler, update_rule_handler,
};
pub use status::{domain_check_handler, status_handler};
