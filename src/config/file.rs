//! Configuration file loading and discovery.
//!
//! Configuration lives in a YAML file that is discovered in the usual
//! places and layered under CLI arguments.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".coffee-mixer.yaml",
    ".coffee-mixer.yml",
    "coffee-mixer.yaml",
    "coffee-mixer.yml",
];

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "coffee-mixer";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/coffee-mixer/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist", path.display());
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(git_root) = find_git_root() {
        if let Some(path) = find_config_in_dir(&git_root) {
            return Some(path);
        }
    }

    if let Some(config_dir) = user_config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir) {
            return Some(path);
        }
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// `~/.config/coffee-mixer` (or the platform equivalent).
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from the discovered file, or fall back to defaults.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence
    /// wherever it differs from the defaults.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        if other.catalog.path.is_some() {
            self.catalog.path.clone_from(&other.catalog.path);
        }

        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.display.chart_max != defaults.display.chart_max {
            self.display.chart_max = other.display.chart_max;
        }
        if other.display.bar_width != defaults.display.bar_width {
            self.display.bar_width = other.display.bar_width;
        }
        if other.display.show_breakdown {
            self.display.show_breakdown = true;
        }

        if other.random.taste != defaults.random.taste {
            self.random.taste = other.random.taste;
        }
        if other.random.seed.is_some() {
            self.random.seed = other.random.seed;
        }

        if other.behavior.strict {
            self.behavior.strict = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        "# coffee-mixer configuration\n\
         # Place this file at .coffee-mixer.yaml in your project root or ~/.config/coffee-mixer/\n\n{}",
        serde_yaml::to_string(&AppConfig::default()).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# coffee-mixer configuration file
# ================================
#
# Place it at:
#   - .coffee-mixer.yaml in your project root
#   - ~/.config/coffee-mixer/coffee-mixer.yaml for global config
#
# CLI arguments always override file settings.

# Ingredient catalog
catalog:
  # Custom catalog file (.json, .yaml, .yml); built-in catalog when null
  path: null

# Output configuration
output:
  # Format: auto, summary, table, json, text
  format: auto
  # Output file path (omit for stdout)
  # file: profile.json
  # Disable colored output
  no_color: false

# Profile display
display:
  # Values are clamped to [0, chart_max] for bars and charts
  chart_max: 10.0
  # Width of summary bars
  bar_width: 20
  # Show per-category contributions
  show_breakdown: false

# Random recipes
random:
  # Taste: random, sweet, bitter, creamy, fruity, nutty
  taste: random
  # Fixed seed for reproducible recipes
  # seed: 42

# Behavior flags
behavior:
  # Exit with code 1 when a recipe references unknown options or brands
  strict: false
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
