//! Outbound HTTP used by the status checker.

pub mod reqwest_prober;

pub use reqwest_prober::ReqwestProber;
