//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Rule`] - A stored configuration snippet
//! - [`ProbeResult`] - Outcome of one single-hop status probe
//!
//! Rules follow the same split as the rest of the crate: [`NewRule`] for
//! creation and [`RuleUpdate`] for the full-replace update.

pub mod probe;
pub mod rule;

pub use probe::ProbeResult;
pub use rule::{NewRule, Rule, RuleUpdate};
