//! Shared building blocks for the skit crates: error helpers, optional
//! helpers, configuration and logging setup.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod util;
