//! Catalog command handlers.
//!
//! Implements `catalog list`, `catalog show` and `catalog validate`.

use crate::catalog::Catalog;
use crate::config::{AppConfig, Validatable};
use crate::error::OptionContext;
use crate::model::{Category, FlavorDimension};
use crate::pipeline::{exit_codes, load_catalog, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct CategorySummary<'a> {
    name: &'a str,
    label: &'a str,
    allows_none: bool,
    options: usize,
}

fn wants_json(config: &AppConfig) -> bool {
    config.output.format == ReportFormat::Json
}

fn emit(content: &str, config: &AppConfig) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(content, &target, config.behavior.quiet)
}

/// List the catalog's categories with option counts.
pub fn run_catalog_list(config: &AppConfig) -> Result<i32> {
    let catalog = load_catalog(&config.catalog)?;

    let content = if wants_json(config) {
        let summaries: Vec<CategorySummary<'_>> = catalog
            .categories()
            .map(|c| CategorySummary {
                name: &c.name,
                label: c.display_label(),
                allows_none: c.allows_none,
                options: c.options.len(),
            })
            .collect();
        serde_json::to_string_pretty(&summaries)?
    } else {
        let width = catalog.category_names().map(str::len).max().unwrap_or(0);
        let mut lines = vec![format!(
            "Catalog v{} ({} options)",
            catalog.version(),
            catalog.option_count()
        )];
        for category in catalog.categories() {
            lines.push(format!(
                "  {:width$}  {:3} options  {}{}",
                category.name,
                category.options.len(),
                category.display_label(),
                if category.allows_none { "" } else { " (required)" },
            ));
        }
        lines.join("\n")
    };

    emit(&content, config)?;
    Ok(exit_codes::SUCCESS)
}

fn option_lines(category: &Category) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", category.display_label(), category.name)];
    for option in &category.options {
        let scores: Vec<String> = FlavorDimension::ALL
            .iter()
            .filter(|d| option.scores.declares(**d))
            .map(|d| format!("{d} {}", option.scores.get(*d)))
            .collect();
        lines.push(format!(
            "  {} [{}] {} per {}{}",
            option.value,
            option.label,
            if scores.is_empty() {
                "no flavor".to_string()
            } else {
                scores.join(", ")
            },
            option.unit.base_amount(),
            option.unit.symbol(),
        ));
        if option.has_brands() {
            let brands: Vec<&str> = option.brands.iter().map(|b| b.value.as_str()).collect();
            lines.push(format!("      brands: {}", brands.join(", ")));
        }
    }
    lines
}

/// Show one category's options, scores and brands.
pub fn run_catalog_show(category_name: &str, config: &AppConfig) -> Result<i32> {
    let catalog = load_catalog(&config.catalog)?;

    let category = catalog.category(category_name).with_context_none(|| {
        let known: Vec<&str> = catalog.category_names().collect();
        format!(
            "Unknown category '{category_name}'. Known categories: {}",
            known.join(", ")
        )
    })?;

    let content = if wants_json(config) {
        serde_json::to_string_pretty(category)?
    } else {
        option_lines(category).join("\n")
    };

    emit(&content, config)?;
    Ok(exit_codes::SUCCESS)
}

/// Validate a catalog file, the configured catalog, or the built-in one.
pub fn run_catalog_validate(path: Option<&Path>, config: &AppConfig) -> Result<i32> {
    let catalog = match path {
        Some(path) => std::borrow::Cow::Owned(
            Catalog::from_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
        ),
        None => load_catalog(&config.catalog)?,
    };

    let issues = catalog.validate();
    let content = if wants_json(config) {
        let fields: Vec<_> = issues
            .iter()
            .map(|i| serde_json::json!({ "field": i.field, "message": i.message }))
            .collect();
        serde_json::to_string_pretty(&serde_json::json!({
            "valid": issues.is_empty(),
            "categories": catalog.categories().count(),
            "options": catalog.option_count(),
            "issues": fields,
        }))?
    } else if issues.is_empty() {
        format!(
            "Catalog is valid: {} categories, {} options",
            catalog.categories().count(),
            catalog.option_count()
        )
    } else {
        let mut lines = vec![format!("Catalog has {} issue(s):", issues.len())];
        lines.extend(issues.iter().map(|i| format!("  {i}")));
        lines.join("\n")
    };

    emit(&content, config)?;
    if issues.is_empty() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::VALIDATION_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn config_to(dir: &tempfile::TempDir, format: ReportFormat) -> (AppConfig, std::path::PathBuf) {
        let out = dir.path().join("out");
        let config = AppConfig::builder()
            .output_format(format)
            .output_file(Some(out.clone()))
            .build();
        (config, out)
    }

    #[test]
    fn test_catalog_list_json() {
        let dir = tempfile::tempdir().unwrap();
        let (config, out) = config_to(&dir, ReportFormat::Json);
        assert_eq!(run_catalog_list(&config).unwrap(), exit_codes::SUCCESS);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 8);
        assert_eq!(json[0]["name"], "coffeeBeans");
        assert_eq!(json[0]["allows_none"], false);
    }

    #[test]
    fn test_catalog_show() {
        let dir = tempfile::tempdir().unwrap();
        let (config, out) = config_to(&dir, ReportFormat::Summary);
        assert_eq!(run_catalog_show("milk", &config).unwrap(), exit_codes::SUCCESS);
        let text = std::fs::read_to_string(out).unwrap();
        assert!(text.starts_with("Milk (milk)"));
        assert!(text.contains("whole-milk [Whole Milk]"));
        assert!(text.contains("brands: greenfields, ultra-milk"));

        assert!(run_catalog_show("tea", &config).is_err());
    }

    #[test]
    fn test_catalog_validate_reports_issues() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.yaml");
        std::fs::write(
            &bad,
            "categories:\n  milk:\n    options:\n      - { label: A, value: a, unit: ml }\n      - { label: B, value: a, unit: ml }\n",
        )
        .unwrap();
        let (config, out) = config_to(&dir, ReportFormat::Summary);
        assert_eq!(
            run_catalog_validate(Some(&bad), &config).unwrap(),
            exit_codes::VALIDATION_FAILED
        );
        assert!(std::fs::read_to_string(out).unwrap().contains("issue"));

        assert_eq!(run_catalog_validate(None, &config).unwrap(), exit_codes::SUCCESS);
    }
}
