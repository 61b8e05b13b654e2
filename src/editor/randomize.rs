//! Random recipe generation.

use crate::catalog::Catalog;
use crate::model::categories::{COFFEE_BEANS, ROAST_LEVEL};
use crate::model::{Category, FlavorDimension, IngredientOption, Recipe, Selection, Unit};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Taste direction for random recipes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TastePreference {
    /// Any option
    #[default]
    Random,
    /// Options that add sweetness
    Sweet,
    /// Options that add bitterness
    Bitter,
    /// Options that add body
    Creamy,
    /// Options that add acidity
    Fruity,
    /// Options that add aroma
    Nutty,
}

impl TastePreference {
    /// The dimension an option must score positively on to qualify.
    #[must_use]
    pub const fn dimension(&self) -> Option<FlavorDimension> {
        match self {
            Self::Random => None,
            Self::Sweet => Some(FlavorDimension::Sweetness),
            Self::Bitter => Some(FlavorDimension::Bitterness),
            Self::Creamy => Some(FlavorDimension::Body),
            Self::Fruity => Some(FlavorDimension::Acidity),
            Self::Nutty => Some(FlavorDimension::Aroma),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sweet => "sweet",
            Self::Bitter => "bitter",
            Self::Creamy => "creamy",
            Self::Fruity => "fruity",
            Self::Nutty => "nutty",
        }
    }
}

impl fmt::Display for TastePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds random recipes from a catalog.
pub struct Randomizer<'c, R = StdRng> {
    catalog: &'c Catalog,
    rng: R,
    taste: TastePreference,
}

impl<'c> Randomizer<'c, StdRng> {
    /// Randomizer seeded from OS entropy.
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Reproducible randomizer.
    #[must_use]
    pub fn seeded(catalog: &'c Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<'c, R: Rng> Randomizer<'c, R> {
    pub const fn with_rng(catalog: &'c Catalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            taste: TastePreference::Random,
        }
    }

    #[must_use]
    pub fn taste(mut self, taste: TastePreference) -> Self {
        self.taste = taste;
        self
    }

    /// Produce one random recipe covering every catalog category.
    pub fn generate(&mut self) -> Recipe {
        let catalog = self.catalog;
        let mut recipe = Recipe::new();
        for category in catalog.categories() {
            let selection = self.pick(category);
            recipe.set(category.name.clone(), selection);
        }

        let beans = recipe
            .selection(COFFEE_BEANS)
            .filter(|s| !s.is_none())
            .map(|s| s.amount);
        if let (Some(amount), Some(roast)) = (beans, recipe.selection_mut(ROAST_LEVEL)) {
            if !roast.is_none() {
                roast.amount = amount;
            }
        }

        tracing::debug!("Generated {} recipe", self.taste);
        recipe
    }

    fn pick(&mut self, category: &Category) -> Selection {
        let (candidates, filtered) = self.candidates(category);
        // `"none"` competes only when the taste did not narrow the field
        let with_none = category.allows_none && !filtered;
        let slots = candidates.len() + usize::from(with_none);
        if slots == 0 {
            return Selection::none();
        }

        let index = self.rng.gen_range(0..slots);
        let Some(option) = candidates.get(index) else {
            return Selection::none();
        };

        let amount = match option.unit {
            Unit::Gram => self.rng.gen_range(5u32..=24),
            Unit::Milliliter => self.rng.gen_range(5u32..=34),
        };
        let mut selection = Selection::new(option.value.clone(), f64::from(amount));
        selection.brand = option
            .brands
            .choose(&mut self.rng)
            .map(|b| b.value.clone());
        selection
    }

    /// Options matching the taste, or all options when none match.
    /// The flag reports whether the taste narrowed the list.
    fn candidates<'a>(&self, category: &'a Category) -> (Vec<&'a IngredientOption>, bool) {
        if let Some(dimension) = self.taste.dimension() {
            let matching: Vec<&IngredientOption> = category
                .options
                .iter()
                .filter(|o| o.scores.get(dimension) > 0.0)
                .collect();
            if !matching.is_empty() {
                return (matching, true);
            }
        }
        (category.options.iter().collect(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScoreMap, NONE_VALUE};

    #[test]
    fn test_seeded_is_reproducible() {
        let catalog = Catalog::builtin();
        let a = Randomizer::seeded(catalog, 42).generate();
        let b = Randomizer::seeded(catalog, 42).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_recipes_are_well_formed() {
        let catalog = Catalog::builtin();
        let mut randomizer = Randomizer::seeded(catalog, 7);
        for _ in 0..200 {
            let recipe = randomizer.generate();
            assert_eq!(recipe.selections.len(), 8);
            for (name, selection) in &recipe.selections {
                if selection.is_none() {
                    assert!(catalog.category(name).unwrap().allows_none);
                    assert_eq!(selection.amount, 0.0);
                    assert_eq!(selection.brand, None);
                    continue;
                }
                let option = catalog.lookup_option(name, &selection.value).unwrap();
                let max = match option.unit {
                    Unit::Gram => 24.0,
                    Unit::Milliliter => 34.0,
                };
                assert!((5.0..=max).contains(&selection.amount));
                assert_eq!(selection.amount.fract(), 0.0);
                assert_eq!(option.has_brands(), selection.brand.is_some());
            }
            let roast = recipe.selection(ROAST_LEVEL).unwrap();
            assert_eq!(roast.amount, recipe.amount_of(COFFEE_BEANS));
        }
    }

    #[test]
    fn test_taste_filters_candidates() {
        let catalog = Catalog::builtin();
        let mut randomizer = Randomizer::seeded(catalog, 3).taste(TastePreference::Sweet);
        for _ in 0..50 {
            let recipe = randomizer.generate();
            let syrup = recipe.selection("syrup").unwrap();
            assert_ne!(syrup.value, NONE_VALUE);
            let option = catalog.lookup_option("syrup", &syrup.value).unwrap();
            assert!(option.scores.get(FlavorDimension::Sweetness) > 0.0);
        }
    }

    #[test]
    fn test_taste_falls_back_to_all_options() {
        let catalog = Catalog::new(vec![Category::new(
            "coffeeBeans",
            vec![IngredientOption::new(
                "Plain",
                "plain",
                Unit::Gram,
                ScoreMap::new().with(FlavorDimension::Body, 1.0),
            )],
        )]);
        let recipe = Randomizer::seeded(&catalog, 1)
            .taste(TastePreference::Fruity)
            .generate();
        assert_eq!(recipe.value_of("coffeeBeans"), "plain");
    }

    #[test]
    fn test_taste_preference_parsing() {
        let taste: TastePreference = serde_yaml::from_str("creamy").unwrap();
        assert_eq!(taste, TastePreference::Creamy);
        assert_eq!(TastePreference::Nutty.dimension(), Some(FlavorDimension::Aroma));
        assert_eq!(TastePreference::default().dimension(), None);
    }
}
