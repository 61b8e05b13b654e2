//! Per-category view of a profile computation.

use super::aggregator::{resolve, summation_order, Accumulator, Resolution};
use crate::catalog::Catalog;
use crate::model::{FlavorProfile, Recipe, ScoreMap, Unit};
use serde::{Deserialize, Serialize};

/// What one category added to the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryContribution {
    pub category: String,
    /// Selected option value (`"none"` when absent from the recipe)
    pub option: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    /// `amount / base amount`, 0 when the category did not resolve
    pub multiplier: f64,
    /// Option scores already scaled by the multiplier
    pub base: ScoreMap,
    /// Brand scores already scaled by the multiplier
    pub brand_scores: ScoreMap,
    pub resolution: Resolution,
}

impl CategoryContribution {
    /// Combined scaled contribution of option and brand.
    #[must_use]
    pub fn total(&self) -> ScoreMap {
        let mut total = self.base.clone();
        for (dimension, value) in self.brand_scores.iter() {
            total.insert(dimension, total.get(dimension) + value);
        }
        total
    }
}

/// Profile plus the contributions it was summed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileBreakdown {
    /// One entry per catalog category, in catalog order, followed by any
    /// active recipe categories the catalog does not know
    pub contributions: Vec<CategoryContribution>,
    /// Sums before the zero floor
    pub raw: FlavorProfile,
    pub profile: FlavorProfile,
}

impl ProfileBreakdown {
    /// Contributions that referenced something missing from the catalog.
    pub fn unresolved(&self) -> impl Iterator<Item = &CategoryContribution> {
        self.contributions
            .iter()
            .filter(|c| c.resolution.is_unresolved())
    }

    #[must_use]
    pub fn has_unresolved(&self) -> bool {
        self.unresolved().next().is_some()
    }

    /// Contributions that added to the profile.
    pub fn contributing(&self) -> impl Iterator<Item = &CategoryContribution> {
        self.contributions
            .iter()
            .filter(|c| matches!(c.resolution, Resolution::Active | Resolution::UnknownBrand))
    }
}

/// Compute a profile and record each category's share of it.
#[must_use]
pub fn compute_breakdown(recipe: &Recipe, catalog: &Catalog) -> ProfileBreakdown {
    let mut contributions = Vec::with_capacity(catalog.categories().count());
    let mut resolved_by_category = Vec::new();

    for name in catalog.category_names() {
        let selection = recipe.selection(name);
        let (resolution, resolved) = resolve(catalog, name, selection);

        let mut contribution = CategoryContribution {
            category: name.to_string(),
            option: recipe.value_of(name).to_string(),
            option_label: None,
            brand: selection.and_then(|s| s.brand.clone()),
            amount: recipe.amount_of(name),
            unit: None,
            multiplier: 0.0,
            base: ScoreMap::new(),
            brand_scores: ScoreMap::new(),
            resolution,
        };

        if let Some(resolved) = resolved {
            resolved_by_category.push((name, resolved));
            contribution.option_label = Some(resolved.option.label.clone());
            contribution.unit = Some(resolved.option.unit);
            contribution.multiplier = resolved.multiplier;
            contribution.base = resolved.option.scores.scaled(resolved.multiplier);
            if let Some(brand) = resolved.brand {
                contribution.brand_scores = brand.scores.scaled(resolved.multiplier);
            }
        }

        contributions.push(contribution);
    }

    for (name, selection) in recipe.active() {
        if catalog.has_category(name) {
            continue;
        }
        contributions.push(CategoryContribution {
            category: name.to_string(),
            option: selection.value.clone(),
            option_label: None,
            brand: selection.brand.clone(),
            amount: selection.amount,
            unit: None,
            multiplier: 0.0,
            base: ScoreMap::new(),
            brand_scores: ScoreMap::new(),
            resolution: Resolution::UnknownCategory,
        });
    }

    // Same summation order as compute_flavor_profile
    let mut acc = Accumulator::default();
    for name in summation_order(catalog) {
        if let Some((_, resolved)) = resolved_by_category.iter().find(|(n, _)| *n == name) {
            acc.add_resolved(resolved);
        }
    }

    ProfileBreakdown {
        contributions,
        raw: acc.raw(),
        profile: acc.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FlavorDimension, Selection};
    use crate::scoring::compute_flavor_profile;

    fn latte() -> Recipe {
        Recipe::new()
            .with("coffeeBeans", Selection::new("arabica", 18.0))
            .with("roastLevel", Selection::new("medium", 18.0))
            .with("brewingMethod", Selection::new("espresso-machine", 40.0))
            .with("milk", Selection::new("whole-milk", 30.0).with_brand("greenfields"))
    }

    #[test]
    fn test_breakdown_matches_score() {
        let catalog = Catalog::builtin();
        let recipe = latte();
        let breakdown = compute_breakdown(&recipe, catalog);
        assert_eq!(breakdown.profile, compute_flavor_profile(&recipe, catalog));
        assert_eq!(breakdown.contributions.len(), 8);
        assert!(!breakdown.has_unresolved());
    }

    #[test]
    fn test_contribution_details() {
        let breakdown = compute_breakdown(&latte(), Catalog::builtin());
        let milk = breakdown
            .contributions
            .iter()
            .find(|c| c.category == "milk")
            .unwrap();
        assert_eq!(milk.resolution, Resolution::Active);
        assert_eq!(milk.multiplier, 2.0);
        assert_eq!(milk.unit, Some(Unit::Milliliter));
        assert_eq!(milk.base.get(FlavorDimension::Sweetness), 2.0);
        assert_eq!(milk.brand_scores.get(FlavorDimension::Sweetness), 2.0);
        assert_eq!(milk.total().get(FlavorDimension::Body), 4.0);

        let syrup = breakdown
            .contributions
            .iter()
            .find(|c| c.category == "syrup")
            .unwrap();
        assert_eq!(syrup.resolution, Resolution::Skipped);
        assert_eq!(syrup.option, "none");
    }

    #[test]
    fn test_unresolved_references_reported() {
        let recipe = latte()
            .with("syrup", Selection::new("maple-bacon", 15.0))
            .with("milk", Selection::new("whole-milk", 30.0).with_brand("no-such-dairy"))
            .with("teaLeaves", Selection::new("sencha", 5.0));
        let breakdown = compute_breakdown(&recipe, Catalog::builtin());

        let unresolved: Vec<(&str, Resolution)> = breakdown
            .unresolved()
            .map(|c| (c.category.as_str(), c.resolution))
            .collect();
        assert_eq!(
            unresolved,
            vec![
                ("milk", Resolution::UnknownBrand),
                ("syrup", Resolution::UnknownOption),
                ("teaLeaves", Resolution::UnknownCategory),
            ]
        );
        assert_eq!(
            breakdown.profile,
            compute_flavor_profile(&recipe, Catalog::builtin())
        );
    }
}
