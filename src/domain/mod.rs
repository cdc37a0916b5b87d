//! Domain layer containing business entities and logic.
//!
//! Everything in this layer is independent of HTTP frameworks and storage
//! engines. Infrastructure implements the traits declared here.
//!
//! # Architecture
//!
//! - [`entities`] - Rules and probe outcomes
//! - [`repositories`] - Rule storage contract
//! - [`host`] - Domain normalization and URL variant construction
//! - [`prober`] - Single-hop status probe contract
//! - [`classify`] - Mapping of probe outcomes to display badges
//!
//! # Domain Check Flow
//!
//! 1. User input is reduced to a bare host by [`host::normalize_host`]
//! 2. [`host::build_variants`] expands it to the four scheme/`www` combinations
//! 3. Each variant is probed through a [`prober::StatusProber`]
//! 4. [`classify::classify`] turns every [`entities::ProbeResult`] into badges

pub mod classify;
pub mod entities;
pub mod host;
pub mod prober;
pub mod repositories;
