//! Structural checks for catalogs.
//!
//! Loading only enforces the schema. These checks catch data mistakes that
//! parse fine but would make lookups ambiguous or displays wrong.

use super::Catalog;
use crate::config::{Validatable, ValidationIssue};
use crate::model::{Category, IngredientOption, ScoreMap, NONE_VALUE};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static regex"));

/// Whether a display color is `#rrggbb` or `transparent`.
#[must_use]
pub fn is_valid_color(color: &str) -> bool {
    color == "transparent" || HEX_COLOR.is_match(color)
}

impl Validatable for Catalog {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.option_count() == 0 {
            issues.push(ValidationIssue::new("categories", "Catalog has no options"));
        }
        for category in self.categories() {
            issues.extend(category.validate());
        }
        issues
    }
}

impl Validatable for Category {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.options.is_empty() {
            issues.push(ValidationIssue::new(
                self.name.clone(),
                "Category has no options",
            ));
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            let field = format!("{}.{}", self.name, option.value);
            if !seen.insert(option.value.as_str()) {
                issues.push(ValidationIssue::new(
                    field.clone(),
                    format!(
                        "Duplicate option value '{}'; only the first is reachable",
                        option.value
                    ),
                ));
            }
            issues.extend(validate_option(&field, option));
        }

        issues
    }
}

fn validate_option(field: &str, option: &IngredientOption) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if option.value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "Option value must not be empty"));
    } else if option.value == NONE_VALUE {
        issues.push(ValidationIssue::new(
            field,
            format!("'{NONE_VALUE}' is reserved and cannot be an option value"),
        ));
    }
    if option.label.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "Option label must not be empty"));
    }
    if let Some(ref color) = option.color {
        if !is_valid_color(color) {
            issues.push(ValidationIssue::new(
                format!("{field}.color"),
                format!("Invalid color '{color}'. Expected #rrggbb or transparent"),
            ));
        }
    }
    issues.extend(validate_scores(&format!("{field}.scores"), &option.scores));

    let mut brands = HashSet::new();
    for brand in &option.brands {
        let brand_field = format!("{field}.brands.{}", brand.value);
        if brand.value.trim().is_empty() || brand.label.trim().is_empty() {
            issues.push(ValidationIssue::new(
                brand_field.clone(),
                "Brand label and value must not be empty",
            ));
        }
        if !brands.insert(brand.value.as_str()) {
            issues.push(ValidationIssue::new(
                brand_field.clone(),
                format!("Duplicate brand value '{}'", brand.value),
            ));
        }
        issues.extend(validate_scores(&format!("{brand_field}.scores"), &brand.scores));
    }

    issues
}

fn validate_scores(field: &str, scores: &ScoreMap) -> Vec<ValidationIssue> {
    scores
        .iter()
        .filter(|(_, weight)| !weight.is_finite())
        .map(|(dimension, weight)| {
            ValidationIssue::new(
                format!("{field}.{dimension}"),
                format!("Score must be a finite number, got {weight}"),
            )
        })
        .collect()
}
