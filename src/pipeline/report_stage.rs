//! Report output stage.
//!
//! Resolves the output format, renders one or more profile reports and
//! writes them to the configured destination.

use crate::catalog::Catalog;
use crate::config::{AppConfig, DEFAULT_SUGGESTION_LIMIT};
use crate::reports::{create_reporter, JsonReporter, ProfileContext, ReportConfig, ReportFormat};
use crate::scoring::Resolution;
use anyhow::Result;

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Warn about every reference the catalog could not resolve.
///
/// Returns the number of unresolved references.
pub fn log_unresolved(context: &ProfileContext<'_>, catalog: &Catalog) -> usize {
    let mut count = 0;
    for contribution in context.breakdown.unresolved() {
        count += 1;
        match contribution.resolution {
            Resolution::UnknownOption => {
                let suggestions = catalog.suggest(
                    &contribution.category,
                    &contribution.option,
                    DEFAULT_SUGGESTION_LIMIT,
                );
                if suggestions.is_empty() {
                    tracing::warn!(
                        "{}: unknown option '{}' contributes nothing",
                        contribution.category,
                        contribution.option
                    );
                } else {
                    tracing::warn!(
                        "{}: unknown option '{}' contributes nothing (did you mean: {}?)",
                        contribution.category,
                        contribution.option,
                        suggestions.join(", ")
                    );
                }
            }
            Resolution::UnknownBrand => tracing::warn!(
                "{}: unknown brand '{}' for '{}', scoring the option alone",
                contribution.category,
                contribution.brand.as_deref().unwrap_or_default(),
                contribution.option
            ),
            _ => tracing::warn!(
                "{}: {} (selection '{}' contributes nothing)",
                contribution.category,
                contribution.resolution.label(),
                contribution.option
            ),
        }
    }
    count
}

/// Render and write several profile reports as one output.
///
/// JSON output becomes a single document with a `profiles` array; the
/// text formats are concatenated.
pub fn output_profile_reports(contexts: &[ProfileContext<'_>], config: &AppConfig) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);
    let report_config = ReportConfig::from_display(&config.display);

    let report = if effective_output == ReportFormat::Json && contexts.len() > 1 {
        JsonReporter::new().generate_batch_report(contexts, &report_config)?
    } else {
        let use_color =
            should_use_color(config.output.no_color) && output_target.is_terminal();
        let reporter = create_reporter(effective_output, use_color);
        let mut rendered = Vec::with_capacity(contexts.len());
        for context in contexts {
            rendered.push(reporter.generate_profile_report(context, &report_config)?);
        }
        rendered.join("\n")
    };

    write_output(&report, &output_target, config.behavior.quiet)
}
