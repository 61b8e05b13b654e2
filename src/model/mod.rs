//! Data model for recipes, ingredients and flavor profiles.
//!
//! This module defines the value types shared by the catalog, the scoring
//! engine and the recipe editor:
//!
//! - [`FlavorProfile`] is the seven-dimensional output of scoring, with
//!   [`FlavorDimension`] naming each axis and [`ScoreMap`] holding the sparse
//!   per-ingredient weights.
//! - [`IngredientOption`], [`BrandOption`] and [`Category`] describe catalog
//!   entries; [`Unit`] fixes each option's serving basis.
//! - [`Recipe`] and [`Selection`] describe what the user picked.

mod flavor;
mod ingredient;
mod recipe;

pub use flavor::*;
pub use ingredient::*;
pub use recipe::*;
