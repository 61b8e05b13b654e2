//! **Flavor profile scoring for coffee recipes.**
//!
//! `coffee-mixer` turns a recipe (coffee beans, roast level, brewing method,
//! milk, creamer, syrup, sweetener and toppings, each with an amount and an
//! optional brand) into a seven-dimensional flavor profile: sweetness,
//! bitterness, acidity, body, aroma, aftertaste and caffeine. It powers both a
//! command-line tool and a library for embedding the scoring engine in other
//! applications.
//!
//! ## Key Features
//!
//! - **Deterministic scoring**: each selected ingredient contributes its
//!   per-serving scores scaled by `amount / base amount` (10 g for solids,
//!   15 ml for liquids); brand variants add their own scores on top.
//! - **Forgiving lookups**: unknown categories, options and brands contribute
//!   nothing instead of failing, and the breakdown reports them.
//! - **Recipe editing rules**: amount default-fill, brand resync and the
//!   coupling between bean and roast amounts.
//! - **Reports**: terminal summary with bars, contribution table, JSON and
//!   plain recipe text.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Recipe`], [`FlavorProfile`] and the catalog entry types.
//! - **[`catalog`]**: the [`Catalog`] registry, built-in data and validation.
//! - **[`scoring`]**: [`compute_flavor_profile`], [`FlavorScorer`] and
//!   per-category breakdowns.
//! - **[`editor`]**: [`RecipeEditor`] and the [`Randomizer`].
//! - **[`reports`]**: report generators.
//! - **[`brew_math`]**: brew ratio and extraction yield.
//!
//! ## Getting Started
//!
//! ```
//! use coffee_mixer::{compute_flavor_profile, Catalog, Recipe, Selection};
//!
//! let recipe = Recipe::new()
//!     .with("coffeeBeans", Selection::new("arabica", 20.0))
//!     .with("milk", Selection::new("whole-milk", 30.0).with_brand("greenfields"));
//!
//! let profile = compute_flavor_profile(&recipe, Catalog::builtin());
//! assert_eq!(profile.acidity, 2.0);
//! assert_eq!(profile.body, 6.0);
//! ```
//!
//! ### Editing a Recipe
//!
//! ```
//! use coffee_mixer::{Catalog, RecipeEditor};
//!
//! let mut editor = RecipeEditor::new(Catalog::builtin());
//! editor.set_amount("coffeeBeans", 20.0)?;
//! assert_eq!(editor.recipe().amount_of("roastLevel"), 20.0);
//! # Ok::<(), coffee_mixer::CoffeeMixerError>(())
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod brew_math;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use config::{AppConfig, AppConfigBuilder, Validatable, ValidationIssue};
pub use editor::{default_recipe, EditNotice, Randomizer, RecipeEditor, TastePreference};
pub use error::{CoffeeMixerError, ErrorContext, OptionContext, Result};
pub use model::{
    BrandOption, Category, FlavorDimension, FlavorProfile, IngredientOption, Recipe, ScoreMap,
    Selection, Unit,
};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{compute_breakdown, compute_flavor_profile, FlavorScorer, ProfileBreakdown};
