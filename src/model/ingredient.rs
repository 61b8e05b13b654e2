//! Ingredient options, brand variants and categories.

use super::flavor::ScoreMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical unit an option's amount is measured in.
///
/// The unit also fixes the per-serving normalization basis: one
/// conventional serving is 10 g for solids and 15 ml for liquids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[serde(alias = "g")]
    Gram,
    #[serde(alias = "ml")]
    Milliliter,
}

impl Unit {
    /// Amount that counts as one serving (multiplier 1).
    #[must_use]
    pub const fn base_amount(&self) -> f64 {
        match self {
            Self::Gram => 10.0,
            Self::Milliliter => 15.0,
        }
    }

    /// Short symbol used when printing amounts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Milliliter => "ml",
        }
    }

    /// Scaling factor for `amount` relative to one serving.
    #[must_use]
    pub fn multiplier(&self, amount: f64) -> f64 {
        amount / self.base_amount()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A brand variant of an ingredient option.
///
/// Brand scores add on top of the parent option's scores and scale with
/// the parent's amount and unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandOption {
    pub label: String,
    /// Unique within the parent option's brand list
    pub value: String,
    #[serde(default)]
    pub scores: ScoreMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl BrandOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>, scores: ScoreMap) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            scores,
            cost: None,
        }
    }
}

/// One selectable ingredient within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngredientOption {
    pub label: String,
    /// Stable identifier, unique within its category
    pub value: String,
    pub unit: Unit,
    #[serde(default)]
    pub scores: ScoreMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<BrandOption>,
    /// Display color, `#rrggbb` or `transparent`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Reference brew time for brewing methods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brew_time_secs: Option<u32>,
}

impl IngredientOption {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        unit: Unit,
        scores: ScoreMap,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            unit,
            scores,
            cost: None,
            brands: Vec::new(),
            color: None,
            brew_time_secs: None,
        }
    }

    /// Builder-style brand list.
    #[must_use]
    pub fn with_brands(mut self, brands: Vec<BrandOption>) -> Self {
        self.brands = brands;
        self
    }

    #[must_use]
    pub fn has_brands(&self) -> bool {
        !self.brands.is_empty()
    }

    /// First brand in declaration order, the default after a resync.
    #[must_use]
    pub fn default_brand(&self) -> Option<&BrandOption> {
        self.brands.first()
    }
}

/// A named, ordered set of mutually exclusive ingredient options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Category key, e.g. `coffeeBeans`. Filled from the catalog map key.
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub label: String,
    /// Whether "none" is a conventional choice for this category.
    #[serde(default)]
    pub allows_none: bool,
    pub options: Vec<IngredientOption>,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, options: Vec<IngredientOption>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            allows_none: false,
            options,
        }
    }

    /// Builder-style `allows_none` flag.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.allows_none = true;
        self
    }

    /// Display label, falling back to the key.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// First option whose value matches.
    #[must_use]
    pub fn option(&self, value: &str) -> Option<&IngredientOption> {
        self.options.iter().find(|o| o.value == value)
    }
}
