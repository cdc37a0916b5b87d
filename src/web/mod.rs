//! Server-rendered dashboard.
//!
//! One page combining the domain status checker and the rule accordion.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers and view models
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
