//! Rule repository implementations.
//!
//! # Repositories
//!
//! - [`PgRuleRepository`] - PostgreSQL table `rules`
//! - [`MemoryRuleRepository`] - In-process store for local runs and tests

pub mod memory_rule_repository;
pub mod pg_rule_repository;

pub use memory_rule_repository::MemoryRuleRepository;
pub use pg_rule_repository::PgRuleRepository;
