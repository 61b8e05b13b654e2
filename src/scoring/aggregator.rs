//! Flavor profile aggregation.
//!
//! Every catalog category contributes independently: the selected option's
//! scores and the selected brand's scores, both scaled by
//! `amount / unit base amount`. Dimensions are floored at zero once all
//! categories are summed. Nothing here fails or logs; unresolvable
//! references simply contribute nothing.

use crate::catalog::Catalog;
use crate::model::{BrandOption, FlavorDimension, FlavorProfile, IngredientOption, Recipe, Selection};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// How a category's selection resolved against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Option (and brand, if any) found; contributes to the profile
    Active,
    /// `"none"` or zero amount; contributes nothing
    Skipped,
    /// Category not present in the catalog
    UnknownCategory,
    /// Option value not present in its category
    UnknownOption,
    /// Option found but the brand is not on its list; the base option
    /// still contributes
    UnknownBrand,
}

impl Resolution {
    /// Whether the selection referenced something the catalog lacks.
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory | Self::UnknownOption | Self::UnknownBrand
        )
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Skipped => "skipped",
            Self::UnknownCategory => "unknown category",
            Self::UnknownOption => "unknown option",
            Self::UnknownBrand => "unknown brand",
        }
    }
}

/// A selection resolved to catalog entries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved<'c> {
    pub option: &'c IngredientOption,
    pub brand: Option<&'c BrandOption>,
    pub multiplier: f64,
}

/// Resolve one category's selection.
///
/// The skip check runs before the option lookup, so a zero amount never
/// reaches the multiplier.
pub(crate) fn resolve<'c>(
    catalog: &'c Catalog,
    category: &str,
    selection: Option<&Selection>,
) -> (Resolution, Option<Resolved<'c>>) {
    let Some(selection) = selection.filter(|s| s.is_active()) else {
        return (Resolution::Skipped, None);
    };
    if !catalog.has_category(category) {
        return (Resolution::UnknownCategory, None);
    }
    let Some(option) = catalog.lookup_option(category, &selection.value) else {
        return (Resolution::UnknownOption, None);
    };

    let multiplier = option.unit.multiplier(selection.amount);
    let (resolution, brand) = match selection.brand.as_deref() {
        None => (Resolution::Active, None),
        Some(value) => match catalog.lookup_brand(option, value) {
            Some(found) => (Resolution::Active, Some(found)),
            None => (Resolution::UnknownBrand, None),
        },
    };

    (
        resolution,
        Some(Resolved {
            option,
            brand,
            multiplier,
        }),
    )
}

/// Running per-dimension sums before the zero floor.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Accumulator([f64; 7]);

impl Accumulator {
    pub fn add(&mut self, dimension: FlavorDimension, value: f64) {
        self.0[dimension as usize] += value;
    }

    pub fn add_resolved(&mut self, resolved: &Resolved<'_>) {
        for (dimension, score) in resolved.option.scores.iter() {
            self.add(dimension, score * resolved.multiplier);
        }
        if let Some(brand) = resolved.brand {
            for (dimension, score) in brand.scores.iter() {
                self.add(dimension, score * resolved.multiplier);
            }
        }
    }

    /// Unfloored sums.
    pub fn raw(&self) -> FlavorProfile {
        FlavorProfile::from_array(self.0)
    }

    /// Final profile with every dimension floored at zero.
    pub fn finish(&self) -> FlavorProfile {
        FlavorProfile::from_array(self.0.map(|v| v.max(0.0)))
    }
}

/// Category names in the order their contributions are summed.
///
/// Sorted by name, so the floating-point sums do not depend on the
/// catalog's declaration order.
pub(crate) fn summation_order(catalog: &Catalog) -> Vec<&str> {
    let mut names: Vec<&str> = catalog.category_names().collect();
    names.sort_unstable();
    names
}

/// Compute the flavor profile of a recipe against a catalog.
///
/// Pure and infallible: categories missing from the recipe, `"none"`
/// selections, zero amounts, unknown options and unknown brands all
/// contribute zero.
#[must_use]
pub fn compute_flavor_profile(recipe: &Recipe, catalog: &Catalog) -> FlavorProfile {
    let mut acc = Accumulator::default();
    for name in summation_order(catalog) {
        if let (_, Some(resolved)) = resolve(catalog, name, recipe.selection(name)) {
            acc.add_resolved(&resolved);
        }
    }
    acc.finish()
}

/// Scores recipes against a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct FlavorScorer<'c> {
    catalog: &'c Catalog,
}

impl<'c> FlavorScorer<'c> {
    #[must_use]
    pub const fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Same as [`compute_flavor_profile`].
    #[must_use]
    pub fn score(&self, recipe: &Recipe) -> FlavorProfile {
        compute_flavor_profile(recipe, self.catalog)
    }

    /// Score a batch of recipes in parallel. Output order matches input.
    #[must_use]
    pub fn score_many(&self, recipes: &[Recipe]) -> Vec<FlavorProfile> {
        recipes.par_iter().map(|recipe| self.score(recipe)).collect()
    }
}
