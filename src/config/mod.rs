//! Configuration for coffee-mixer.
//!
//! - Type-safe configuration structures with JSON schema support
//! - Validation for configuration values (and, through the same trait,
//!   catalog data)
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.coffee-mixer.yaml` file in your project root or
//! `~/.config/coffee-mixer/`:
//!
//! ```yaml
//! output:
//!   format: summary
//! display:
//!   bar_width: 30
//! random:
//!   taste: creamy
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_BAR_WIDTH, DEFAULT_SUGGESTION_LIMIT, MAX_BAR_WIDTH};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CatalogConfig, DisplayConfig, OutputConfig,
    RandomConfig,
};
pub use validation::{Validatable, ValidationIssue};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.coffee-mixer.yaml`.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
