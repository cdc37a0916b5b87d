//! HTML template rendering handlers for the dashboard.

mod dashboard;

pub use dashboard::{DashboardQuery, DashboardTemplate, dashboard_handler};
