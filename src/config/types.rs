//! Configuration types for coffee-mixer.

use crate::editor::TastePreference;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_BAR_WIDTH, DEFAULT_CHART_MAX};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Application configuration, loaded from a YAML file and layered with CLI
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Ingredient catalog source
    pub catalog: CatalogConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Profile display options
    pub display: DisplayConfig,
    /// Random recipe generation
    pub random: RandomConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn catalog_path(mut self, path: Option<PathBuf>) -> Self {
        self.config.catalog.path = path;
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn show_breakdown(mut self, show: bool) -> Self {
        self.config.display.show_breakdown = show;
        self
    }

    pub const fn taste(mut self, taste: TastePreference) -> Self {
        self.config.random.taste = taste;
        self
    }

    pub const fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.random.seed = seed;
        self
    }

    /// Exit non-zero when a recipe references unknown options or brands.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.config.behavior.strict = strict;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// Custom catalog file (.json, .yaml or .yml). The built-in catalog is
    /// used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ReportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DisplayConfig {
    /// Upper bound profile values are clamped to for bars and charts
    pub chart_max: f64,
    /// Width of summary bars in terminal cells
    #[schemars(range(min = 1, max = 200))]
    pub bar_width: usize,
    /// Include the per-category contribution table
    pub show_breakdown: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chart_max: DEFAULT_CHART_MAX,
            bar_width: DEFAULT_BAR_WIDTH,
            show_breakdown: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RandomConfig {
    pub taste: TastePreference,
    /// Fixed RNG seed for reproducible recipes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when a recipe has unresolved references
    pub strict: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
