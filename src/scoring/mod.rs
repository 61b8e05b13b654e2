//! Flavor profile scoring.
//!
//! [`compute_flavor_profile`] is the core computation. [`FlavorScorer`]
//! wraps a catalog for repeated and batch use, and [`compute_breakdown`]
//! explains a result category by category. [`temperature`] models how the
//! finished profile is perceived as the cup cools.

mod aggregator;
mod breakdown;
pub mod temperature;

pub use aggregator::{compute_flavor_profile, FlavorScorer, Resolution};
pub use breakdown::{compute_breakdown, CategoryContribution, ProfileBreakdown};
pub use temperature::{peak_sweetness, taste_at_temperature, temperature_curve, TastePoint};

impl FlavorScorer<'_> {
    /// Per-category contributions alongside the profile.
    #[must_use]
    pub fn breakdown(&self, recipe: &crate::model::Recipe) -> ProfileBreakdown {
        compute_breakdown(recipe, self.catalog())
    }
}
