//! Recipe editing rules.
//!
//! [`RecipeEditor`] owns a [`Recipe`] and applies the rules a recipe UI
//! enforces on every change:
//!
//! - choosing `"none"` zeroes the amount
//! - moving from `"none"` to a real option fills in one serving
//!   (10 g or 15 ml; roast level follows the beans amount)
//! - the brand is re-checked against the new option and reset to its first
//!   brand, or cleared, when it no longer fits
//! - coffee beans and roast level amounts stay equal
//!
//! Each mutating call returns the [`EditNotice`]s it caused so callers can
//! surface them.

mod randomize;

pub use randomize::{Randomizer, TastePreference};

use crate::catalog::Catalog;
use crate::error::{CoffeeMixerError, Result};
use crate::model::categories::{BREWING_METHOD, COFFEE_BEANS, ROAST_LEVEL};
use crate::model::{Category, FlavorProfile, Recipe, Selection, Unit, NONE_VALUE};
use crate::scoring::compute_flavor_profile;
use serde::Serialize;
use std::fmt;

/// Starting selections for a fresh recipe: `(category, value, amount)`.
const DEFAULT_SELECTIONS: [(&str, &str, f64); 3] = [
    (COFFEE_BEANS, "arabica", 18.0),
    (ROAST_LEVEL, "medium", 18.0),
    (BREWING_METHOD, "espresso-machine", 40.0),
];

/// Something an edit changed beyond the field that was set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditNotice {
    /// Amount filled with one serving after leaving `"none"`
    AmountDefaulted { category: String, amount: f64 },
    /// Invalid amount input replaced with 0
    AmountCoerced { category: String, input: String },
    /// Amount copied to the coupled category
    AmountMirrored {
        from: String,
        to: String,
        amount: f64,
    },
    /// Previous brand not offered by the new option; switched to another
    BrandAdjusted {
        category: String,
        previous: String,
        current: String,
    },
    /// Previous brand dropped because the new option has no brands
    BrandCleared { category: String, previous: String },
}

impl fmt::Display for EditNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountDefaulted { category, amount } => {
                write!(f, "{category}: amount set to {amount}")
            }
            Self::AmountCoerced { category, input } => {
                write!(f, "{category}: invalid amount '{input}' replaced with 0")
            }
            Self::AmountMirrored { from, to, amount } => {
                write!(f, "{to}: amount {amount} mirrored from {from}")
            }
            Self::BrandAdjusted {
                category,
                previous,
                current,
            } => write!(
                f,
                "{category}: brand '{previous}' is not available for this option, switched to '{current}'"
            ),
            Self::BrandCleared { category, previous } => {
                write!(f, "{category}: brand '{previous}' removed, option has no brands")
            }
        }
    }
}

/// The recipe a fresh editor starts from.
///
/// Default selections missing from `catalog` fall back to `"none"`, and
/// every other catalog category starts at `"none"` with amount 0.
#[must_use]
pub fn default_recipe(catalog: &Catalog) -> Recipe {
    let mut recipe = Recipe::new();
    for name in catalog.category_names() {
        let selection = DEFAULT_SELECTIONS
            .iter()
            .find(|(category, value, _)| {
                *category == name && catalog.lookup_option(name, value).is_some()
            })
            .map_or_else(Selection::none, |(_, value, amount)| {
                Selection::new(*value, *amount)
            });
        recipe.set(name, selection);
    }
    recipe
}

/// Applies editing rules to an owned recipe.
#[derive(Debug, Clone)]
pub struct RecipeEditor<'c> {
    catalog: &'c Catalog,
    recipe: Recipe,
}

impl<'c> RecipeEditor<'c> {
    /// Start from [`default_recipe`].
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            recipe: default_recipe(catalog),
        }
    }

    /// Edit an existing recipe.
    #[must_use]
    pub const fn with_recipe(catalog: &'c Catalog, recipe: Recipe) -> Self {
        Self { catalog, recipe }
    }

    #[must_use]
    pub const fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    #[must_use]
    pub fn into_recipe(self) -> Recipe {
        self.recipe
    }

    #[must_use]
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Profile of the current recipe.
    #[must_use]
    pub fn profile(&self) -> FlavorProfile {
        compute_flavor_profile(&self.recipe, self.catalog)
    }

    fn category(&self, name: &str) -> Result<&'c Category> {
        self.catalog
            .category(name)
            .ok_or_else(|| CoffeeMixerError::unknown_category(name))
    }

    fn selection_entry(&mut self, category: &str) -> &mut Selection {
        self.recipe
            .selections
            .entry(category.to_string())
            .or_default()
    }

    /// Select an option (or `"none"`) for a category.
    ///
    /// Values the catalog does not know are stored as-is so they keep
    /// scoring to zero; their brand is cleared.
    pub fn set_value(&mut self, category: &str, value: &str) -> Result<Vec<EditNotice>> {
        let definition = self.category(category)?;
        let option = definition.option(value).filter(|_| value != NONE_VALUE);
        let mut notices = Vec::new();

        let beans_amount = self
            .recipe
            .selection(COFFEE_BEANS)
            .filter(|s| s.is_active())
            .map(|s| s.amount);

        let selection = self.selection_entry(category);
        let was_none = selection.is_none();
        selection.value = value.to_string();

        if value == NONE_VALUE {
            selection.amount = 0.0;
        } else if was_none {
            let amount = match beans_amount {
                Some(amount) if category == ROAST_LEVEL => amount,
                _ => option.map_or(Unit::Milliliter, |o| o.unit).base_amount(),
            };
            selection.amount = amount;
            notices.push(EditNotice::AmountDefaulted {
                category: category.to_string(),
                amount,
            });
        }

        // Brand resync
        let previous = selection.brand.take();
        match option.filter(|o| o.has_brands()) {
            None => {
                if let Some(previous) = previous {
                    notices.push(EditNotice::BrandCleared {
                        category: category.to_string(),
                        previous,
                    });
                }
            }
            Some(option) => {
                let compatible = previous
                    .as_deref()
                    .is_some_and(|p| option.brands.iter().any(|b| b.value == p));
                if compatible {
                    selection.brand = previous;
                } else {
                    selection.brand = option.default_brand().map(|b| b.value.clone());
                    if let (Some(previous), Some(current)) = (previous, selection.brand.clone()) {
                        notices.push(EditNotice::BrandAdjusted {
                            category: category.to_string(),
                            previous,
                            current,
                        });
                    }
                }
            }
        }

        if category == COFFEE_BEANS || category == ROAST_LEVEL {
            notices.extend(self.mirror_amount(COFFEE_BEANS, ROAST_LEVEL));
        }

        self.log_notices(&notices);
        Ok(notices)
    }

    /// Set a category's amount. Negative or non-finite input becomes 0.
    pub fn set_amount(&mut self, category: &str, amount: f64) -> Result<Vec<EditNotice>> {
        self.category(category)?;
        let mut notices = Vec::new();

        let amount = if amount.is_finite() && amount >= 0.0 {
            amount
        } else {
            notices.push(EditNotice::AmountCoerced {
                category: category.to_string(),
                input: amount.to_string(),
            });
            0.0
        };
        self.selection_entry(category).amount = amount;

        if category == COFFEE_BEANS {
            notices.extend(self.mirror_amount(COFFEE_BEANS, ROAST_LEVEL));
        } else if category == ROAST_LEVEL {
            notices.extend(self.mirror_amount(ROAST_LEVEL, COFFEE_BEANS));
        }

        self.log_notices(&notices);
        Ok(notices)
    }

    /// Set an amount from user text. Unparsable text becomes 0.
    pub fn set_amount_text(&mut self, category: &str, text: &str) -> Result<Vec<EditNotice>> {
        match text.trim().parse::<f64>() {
            Ok(amount) => self.set_amount(category, amount),
            Err(_) => {
                self.category(category)?;
                let mut notices = vec![EditNotice::AmountCoerced {
                    category: category.to_string(),
                    input: text.to_string(),
                }];
                notices.extend(self.set_amount(category, 0.0)?);
                Ok(notices)
            }
        }
    }

    /// Choose a brand offered by the selected option, or clear it.
    pub fn set_brand(&mut self, category: &str, brand: Option<&str>) -> Result<Vec<EditNotice>> {
        self.category(category)?;
        let value = self.recipe.value_of(category).to_string();

        let brand = match brand {
            None => None,
            Some(brand) => {
                let offered = self
                    .catalog
                    .lookup_option(category, &value)
                    .and_then(|o| self.catalog.lookup_brand(o, brand));
                if offered.is_none() {
                    return Err(CoffeeMixerError::incompatible_brand(category, value, brand));
                }
                Some(brand.to_string())
            }
        };

        self.selection_entry(category).brand = brand;
        Ok(Vec::new())
    }

    /// Copy `source`'s amount to `target` when both are selected.
    fn mirror_amount(&mut self, source: &str, target: &str) -> Option<EditNotice> {
        let amount = self
            .recipe
            .selection(source)
            .filter(|s| !s.is_none())?
            .amount;
        let partner = self
            .recipe
            .selection_mut(target)
            .filter(|s| !s.is_none())?;
        if partner.amount == amount {
            return None;
        }
        partner.amount = amount;
        Some(EditNotice::AmountMirrored {
            from: source.to_string(),
            to: target.to_string(),
            amount,
        })
    }

    fn log_notices(&self, notices: &[EditNotice]) {
        for notice in notices {
            tracing::debug!("{notice}");
        }
    }
}
