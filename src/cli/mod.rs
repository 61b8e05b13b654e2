//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod brew;
mod catalog;
mod profile;
mod random;

pub use brew::run_brew_math;
pub use catalog::{run_catalog_list, run_catalog_show, run_catalog_validate};
pub use profile::run_profile;
pub use random::run_random;

// Re-export config types used by handlers
pub use crate::config::AppConfig;
