//! Unified error types for coffee-mixer.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and user-friendly messages. Note that flavor
//! scoring itself never fails: unresolvable references contribute zero.
//! These errors cover the edges (loading catalogs and recipes, editing,
//! configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coffee-mixer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoffeeMixerError {
    /// Errors while loading or interpreting an ingredient catalog
    #[error("Catalog error: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors while loading or editing a recipe
    #[error("Recipe error: {context}")]
    Recipe {
        context: String,
        #[source]
        source: RecipeErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Unsupported catalog file extension: {0} (expected .json, .yaml or .yml)")]
    UnsupportedExtension(String),

    #[error("Unsupported catalog version: {version} (supported: {supported})")]
    UnsupportedVersion { version: String, supported: String },
}

/// Specific recipe error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RecipeErrorKind {
    #[error("Invalid recipe document: {0}")]
    InvalidDocument(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Brand '{brand}' is not available for '{option}' in {category}")]
    IncompatibleBrand {
        category: String,
        option: String,
        brand: String,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for coffee-mixer operations
pub type Result<T> = std::result::Result<T, CoffeeMixerError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CoffeeMixerError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a recipe error with context
    pub fn recipe(context: impl Into<String>, source: RecipeErrorKind) -> Self {
        Self::Recipe {
            context: context.into(),
            source,
        }
    }

    /// Create a recipe error for a category the catalog does not know
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::recipe(
            "editing recipe",
            RecipeErrorKind::UnknownCategory(category.into()),
        )
    }

    /// Create a recipe error for a brand not offered by the selected option
    pub fn incompatible_brand(
        category: impl Into<String>,
        option: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self::recipe(
            "selecting brand",
            RecipeErrorKind::IncompatibleBrand {
                category: category.into(),
                option: option.into(),
                brand: brand.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CoffeeMixerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CoffeeMixerError {
    fn from(err: serde_json::Error) -> Self {
        Self::catalog(
            "JSON deserialization",
            CatalogErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for CoffeeMixerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::catalog(
            "YAML deserialization",
            CatalogErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, so an error raised deep in a loader reads
/// `"loading recipe latte.yaml: parsing selections: ..."` by the time it
/// reaches the CLI.
///
/// # Example
///
/// ```ignore
/// use coffee_mixer::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<Catalog> {
///     let content = std::fs::read_to_string(path).context("reading catalog file")?;
///     Catalog::from_json(&content)
///         .with_context(|| format!("parsing catalog from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<CoffeeMixerError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: CoffeeMixerError, new_ctx: &str) -> CoffeeMixerError {
    match err {
        CoffeeMixerError::Catalog {
            context: existing,
            source,
        } => CoffeeMixerError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CoffeeMixerError::Recipe {
            context: existing,
            source,
        } => CoffeeMixerError::Recipe {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CoffeeMixerError::Io {
            path,
            message,
            source,
        } => CoffeeMixerError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        CoffeeMixerError::Config(msg) => CoffeeMixerError::Config(chain_context(new_ctx, &msg)),
        CoffeeMixerError::Validation(msg) => {
            CoffeeMixerError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| CoffeeMixerError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| CoffeeMixerError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoffeeMixerError::unknown_category("teaLeaves");
        let display = err.to_string();
        assert!(
            display.contains("Recipe"),
            "Error message should mention the recipe: {}",
            display
        );

        let err = CoffeeMixerError::incompatible_brand("milk", "oat-milk", "greenfields");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Brand 'greenfields' is not available for 'oat-milk' in milk")
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CoffeeMixerError::io("/path/to/catalog.json", io_err);

        assert!(err.to_string().contains("/path/to/catalog.json"));
    }

    #[test]
    fn test_context_chaining() {
        let initial_err: Result<()> = Err(CoffeeMixerError::catalog(
            "initial context",
            CatalogErrorKind::InvalidJson("eof".to_string()),
        ));

        let err_with_context = initial_err.context("outer context");

        match err_with_context {
            Err(CoffeeMixerError::Catalog { context, .. }) => {
                assert_eq!(context, "outer context: initial context");
            }
            _ => panic!("Expected Catalog error"),
        }
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(CoffeeMixerError::unknown_category("tea"))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(CoffeeMixerError::Recipe { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: editing recipe");
            }
            _ => panic!("Expected Recipe error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(CoffeeMixerError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_serde_errors_convert_to_catalog_errors() {
        let err: CoffeeMixerError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            CoffeeMixerError::Catalog {
                source: CatalogErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_option_context() {
        let some_value: Option<i32> = Some(42);
        assert_eq!(some_value.context_none("missing value").unwrap(), 42);

        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(CoffeeMixerError::Validation(msg)) => assert_eq!(msg, "missing value"),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
