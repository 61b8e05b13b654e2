//! Plain-text renderings of a recipe.
//!
//! [`recipe_copy_text`] is the shareable one-line-per-ingredient form.
//! [`prompt_fields`] is the per-category input given to a text-generation
//! service; nothing here talks to one.

use super::{ProfileContext, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::catalog::Catalog;
use crate::model::{Recipe, NONE_VALUE};
use indexmap::IndexMap;
use std::fmt::Write;

/// Format an amount without a trailing `.0`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount}")
}

/// Split a camelCase key into capitalized words: `coffeeBeans` becomes
/// `Coffee Beans`.
fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

/// One line per selected ingredient:
/// `Category: Option (amount unit)`, with the brand label appended.
///
/// Categories set to `"none"` or with a zero amount are left out. Values
/// the catalog does not know are printed as-is, without a unit.
#[must_use]
pub fn recipe_copy_text(recipe: &Recipe, catalog: &Catalog) -> String {
    recipe
        .active()
        .map(|(category, selection)| {
            let category_label = catalog
                .category(category)
                .map_or_else(|| humanize_key(category), |c| c.display_label().to_string());
            let option = catalog.lookup_option(category, &selection.value);
            let option_label = option.map_or(selection.value.as_str(), |o| o.label.as_str());
            let unit = option.map_or("", |o| o.unit.symbol());

            let mut line = format!(
                "{category_label}: {option_label} ({}{unit})",
                format_amount(selection.amount)
            );
            if let Some(brand) = selection.brand.as_deref() {
                let brand_label = option
                    .and_then(|o| catalog.lookup_brand(o, brand))
                    .map_or(brand, |b| b.label.as_str());
                let _ = write!(line, " ({brand_label})");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-category text input for a text-generation request.
///
/// Each catalog category maps to `"<amount><unit> <value>"` plus
/// `" (<brand>)"` when a brand is set, or `"none"`.
#[must_use]
pub fn prompt_fields(recipe: &Recipe, catalog: &Catalog) -> IndexMap<String, String> {
    catalog
        .category_names()
        .map(|category| {
            let value = recipe.value_of(category);
            let text = if value == NONE_VALUE {
                NONE_VALUE.to_string()
            } else {
                let unit = catalog
                    .lookup_option(category, value)
                    .map_or("", |o| o.unit.symbol());
                let mut text = format!("{}{unit} {value}", format_amount(recipe.amount_of(category)));
                if let Some(brand) = recipe.brand_of(category) {
                    let _ = write!(text, " ({brand})");
                }
                text
            };
            (category.to_string(), text)
        })
        .collect()
}

/// Reporter for the copy-recipe text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeTextReporter;

impl RecipeTextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for RecipeTextReporter {
    fn generate_profile_report(
        &self,
        context: &ProfileContext<'_>,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut text = recipe_copy_text(context.recipe, context.catalog);
        text.push('\n');
        Ok(text)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Selection;

    fn sample() -> Recipe {
        Recipe::new()
            .with("coffeeBeans", Selection::new("arabica", 18.0))
            .with("roastLevel", Selection::new("medium", 18.0))
            .with("milk", Selection::new("whole-milk", 30.0).with_brand("greenfields"))
            .with("syrup", Selection::none())
            .with("sweetener", Selection::new("honey", 7.5))
    }

    #[test]
    fn test_copy_text() {
        let text = recipe_copy_text(&sample(), Catalog::builtin());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Coffee Beans: Arabica (18g)",
                "Roast Level: Medium (18g)",
                "Milk: Whole Milk (30ml) (Greenfields)",
                "Sweetener: Madu (Honey) (7.5ml)",
            ]
        );
    }

    #[test]
    fn test_copy_text_unknown_entries() {
        let recipe = Recipe::new().with("teaLeaves", Selection::new("sencha", 5.0));
        assert_eq!(recipe_copy_text(&recipe, Catalog::builtin()), "Tea Leaves: sencha (5)");
    }

    #[test]
    fn test_unlisted_brand_printed_as_given() {
        let recipe =
            Recipe::new().with("milk", Selection::new("whole-milk", 30.0).with_brand("nestle"));
        let catalog = Catalog::builtin();
        assert_eq!(recipe_copy_text(&recipe, catalog), "Milk: Whole Milk (30ml) (nestle)");
        assert_eq!(prompt_fields(&recipe, catalog)["milk"], "30ml whole-milk (nestle)");
    }

    #[test]
    fn test_prompt_fields() {
        let fields = prompt_fields(&sample(), Catalog::builtin());
        assert_eq!(fields.len(), 8);
        assert_eq!(fields["coffeeBeans"], "18g arabica");
        assert_eq!(fields["milk"], "30ml whole-milk (greenfields)");
        assert_eq!(fields["syrup"], "none");
        assert_eq!(fields["toppings"], "none");
        assert_eq!(fields.keys().next().map(String::as_str), Some("coffeeBeans"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(30.0), "30");
        assert_eq!(format_amount(12.5), "12.5");
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("brewingMethod"), "Brewing Method");
        assert_eq!(humanize_key("milk"), "Milk");
    }
}
