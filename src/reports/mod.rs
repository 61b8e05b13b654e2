//! Report generation for flavor profiles.
//!
//! - Summary: profile bars for the terminal
//! - Table: aligned per-category contributions
//! - JSON: structured data for programmatic use
//! - Text: the plain "copy recipe" rendering
//!
//! [`recipe_text`] also provides the per-category prompt fields handed to
//! text-generation collaborators.

mod json;
pub mod recipe_text;
mod summary;
mod types;

pub use json::JsonReporter;
pub use recipe_text::{format_amount, prompt_fields, recipe_copy_text, RecipeTextReporter};
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat};

use crate::catalog::Catalog;
use crate::model::Recipe;
use crate::scoring::{compute_breakdown, ProfileBreakdown};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Everything a reporter needs about one recipe.
#[derive(Debug, Clone)]
pub struct ProfileContext<'a> {
    pub recipe: &'a Recipe,
    pub catalog: &'a Catalog,
    pub breakdown: ProfileBreakdown,
}

impl<'a> ProfileContext<'a> {
    /// Score `recipe` and keep the breakdown for rendering.
    #[must_use]
    pub fn new(recipe: &'a Recipe, catalog: &'a Catalog) -> Self {
        Self {
            recipe,
            catalog,
            breakdown: compute_breakdown(recipe, catalog),
        }
    }

    /// Recipe name, or a generic title.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.recipe.name.as_deref().unwrap_or("Untitled recipe")
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a report for one recipe.
    fn generate_profile_report(
        &self,
        context: &ProfileContext<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a report to a writer
    fn write_profile_report(
        &self,
        context: &ProfileContext<'_>,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_profile_report(context, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a reporter for a concrete format. `Auto` renders as a summary.
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
        ReportFormat::Table => {
            let reporter = TableReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Text => Box::new(RecipeTextReporter::new()),
    }
}
