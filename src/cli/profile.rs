//! Profile command handler.
//!
//! Implements the `profile` and `breakdown` subcommands.

use crate::config::AppConfig;
use crate::pipeline::{
    exit_codes, load_catalog, load_recipe_with_context, log_unresolved, output_profile_reports,
};
use crate::reports::ProfileContext;
use anyhow::Result;
use std::path::PathBuf;

/// Score one or more recipe files and report their profiles.
pub fn run_profile(recipe_paths: &[PathBuf], config: &AppConfig) -> Result<i32> {
    let catalog = load_catalog(&config.catalog)?;
    let quiet = config.behavior.quiet;

    let recipes = recipe_paths
        .iter()
        .map(|path| load_recipe_with_context(path, quiet))
        .collect::<Result<Vec<_>>>()?;

    let contexts: Vec<ProfileContext<'_>> = recipes
        .iter()
        .map(|recipe| ProfileContext::new(recipe, &catalog))
        .collect();

    let unresolved: usize = contexts
        .iter()
        .map(|context| log_unresolved(context, &catalog))
        .sum();

    output_profile_reports(&contexts, config)?;

    if config.behavior.strict && unresolved > 0 {
        tracing::warn!("{unresolved} unresolved reference(s) with --strict");
        return Ok(exit_codes::VALIDATION_FAILED);
    }
    Ok(exit_codes::SUCCESS)
}
