//! regionswitch - one authenticated session per region, switchable in place
//!
//! This library exposes modules for use in integration tests and by host
//! integrations that embed the switcher.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod traits;
