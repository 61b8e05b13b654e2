//! Validation for configuration values and catalog data.

use super::defaults::MAX_BAR_WIDTH;
use super::types::*;

// ============================================================================
// Validation Issue
// ============================================================================

/// A single validation finding, scoped to a dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The field that failed validation
    pub field: String,
    /// Description of the problem
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationIssue {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for types that can report structural problems without failing.
pub trait Validatable {
    /// Validate, returning every issue found.
    fn validate(&self) -> Vec<ValidationIssue>;

    /// Check if there are no issues.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut errors = Vec::new();
        errors.extend(self.catalog.validate());
        errors.extend(self.output.validate());
        errors.extend(self.display.validate());
        errors
    }
}

impl AppConfig {
    /// Fail with every issue joined into one config error.
    pub fn ensure_valid(&self) -> crate::error::Result<()> {
        let issues = self.validate();
        if issues.is_empty() {
            return Ok(());
        }
        let joined: Vec<String> = issues.iter().map(ToString::to_string).collect();
        Err(crate::error::CoffeeMixerError::config(joined.join("; ")))
    }
}

impl Validatable for CatalogConfig {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut errors = Vec::new();
        if let Some(ref path) = self.path {
            if !path.exists() {
                errors.push(ValidationIssue::new(
                    "catalog.path",
                    format!("Catalog file not found: {}", path.display()),
                ));
            } else {
                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(str::to_ascii_lowercase);
                if !matches!(ext.as_deref(), Some("json" | "yaml" | "yml")) {
                    errors.push(ValidationIssue::new(
                        "catalog.path",
                        "Catalog file must have a .json, .yaml or .yml extension",
                    ));
                }
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ValidationIssue::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for DisplayConfig {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut errors = Vec::new();
        if !self.chart_max.is_finite() || self.chart_max <= 0.0 {
            errors.push(ValidationIssue::new(
                "display.chart_max",
                format!("Chart max must be a positive number, got {}", self.chart_max),
            ));
        }
        if self.bar_width == 0 || self.bar_width > MAX_BAR_WIDTH {
            errors.push(ValidationIssue::new(
                "display.bar_width",
                format!(
                    "Bar width must be between 1 and {MAX_BAR_WIDTH}, got {}",
                    self.bar_width
                ),
            ));
        }
        errors
    }
}
