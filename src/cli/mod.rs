//! CLI module for regionswitch.
//!
//! Manages the durable region → token map from a terminal, outside any
//! browser page:
//! - Argument parsing
//! - Listing and storing region tokens
//! - Remote validation of a stored token
//! - Resolving which region a navigation target asks for
//!
//! # Usage
//!
//! ```ignore
//! use regionswitch::cli::{execute, parse_args, CliContext};
//! use regionswitch::config::SwitcherConfig;
//!
//! let command = parse_args(std::env::args())?;
//! let ctx = CliContext::from_config(SwitcherConfig::from_env())?;
//! println!("{}", execute(command, &ctx).await?);
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use commands::{execute, CliContext};
pub use version::{version_line, VERSION};
