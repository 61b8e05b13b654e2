//! Recipe selections.
//!
//! A [`Recipe`] holds, per category, the selected option value, an amount in
//! the option's unit and an optional brand. Categories missing from the map
//! read as `"none"`.

use crate::error::{CoffeeMixerError, RecipeErrorKind, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel value meaning "no ingredient from this category".
pub const NONE_VALUE: &str = "none";

/// Category keys of the built-in catalog.
pub mod categories {
    pub const COFFEE_BEANS: &str = "coffeeBeans";
    pub const ROAST_LEVEL: &str = "roastLevel";
    pub const BREWING_METHOD: &str = "brewingMethod";
    pub const MILK: &str = "milk";
    pub const CREAMER: &str = "creamer";
    pub const SYRUP: &str = "syrup";
    pub const SWEETENER: &str = "sweetener";
    pub const TOPPINGS: &str = "toppings";

    /// Built-in categories in display order.
    pub const ALL: [&str; 8] = [
        COFFEE_BEANS,
        ROAST_LEVEL,
        BREWING_METHOD,
        MILK,
        CREAMER,
        SYRUP,
        SWEETENER,
        TOPPINGS,
    ];
}

/// The choice made for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Option value, or `"none"`
    pub value: String,
    /// Quantity in the option's unit
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl Selection {
    #[must_use]
    pub fn new(value: impl Into<String>, amount: f64) -> Self {
        Self {
            value: value.into(),
            amount,
            brand: None,
        }
    }

    /// The `"none"` selection with amount 0.
    #[must_use]
    pub fn none() -> Self {
        Self::new(NONE_VALUE, 0.0)
    }

    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.value == NONE_VALUE
    }

    /// Whether this selection can contribute to a profile at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_none() && self.amount != 0.0
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::none()
    }
}

/// A user's recipe: one [`Selection`] per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub selections: IndexMap<String, Selection>,
}

impl Recipe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style selection.
    #[must_use]
    pub fn with(mut self, category: impl Into<String>, selection: Selection) -> Self {
        self.selections.insert(category.into(), selection);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Selection for a category, if one was recorded.
    #[must_use]
    pub fn selection(&self, category: &str) -> Option<&Selection> {
        self.selections.get(category)
    }

    pub fn selection_mut(&mut self, category: &str) -> Option<&mut Selection> {
        self.selections.get_mut(category)
    }

    /// Insert or replace a category's selection.
    pub fn set(&mut self, category: impl Into<String>, selection: Selection) {
        self.selections.insert(category.into(), selection);
    }

    /// Selected value, `"none"` when the category is absent.
    #[must_use]
    pub fn value_of(&self, category: &str) -> &str {
        self.selection(category).map_or(NONE_VALUE, |s| s.value.as_str())
    }

    /// Amount, 0 when the category is absent.
    #[must_use]
    pub fn amount_of(&self, category: &str) -> f64 {
        self.selection(category).map_or(0.0, |s| s.amount)
    }

    #[must_use]
    pub fn brand_of(&self, category: &str) -> Option<&str> {
        self.selection(category).and_then(|s| s.brand.as_deref())
    }

    /// Categories that are selected with a non-zero amount.
    pub fn active(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.selections
            .iter()
            .filter(|(_, s)| s.is_active())
            .map(|(c, s)| (c.as_str(), s))
    }

    /// Interpret a parsed recipe document.
    ///
    /// Accepts the structured form (`{ name, selections: { category: { value,
    /// amount, brand } } }`) as well as the flat form used by the web app
    /// (`{ coffeeBeans, coffeeBeansAmount, milkBrand, ... }`).
    pub fn from_document(document: Value) -> Result<Self> {
        let is_structured = document
            .as_object()
            .is_some_and(|o| o.contains_key("selections"));
        if is_structured {
            serde_json::from_value(document).map_err(|e| {
                CoffeeMixerError::recipe(
                    "reading structured recipe",
                    RecipeErrorKind::InvalidDocument(e.to_string()),
                )
            })
        } else {
            Self::from_flat(&document)
        }
    }

    /// Convert the flat `category` / `categoryAmount` / `categoryBrand` shape.
    pub fn from_flat(document: &Value) -> Result<Self> {
        let Some(fields) = document.as_object() else {
            return Err(CoffeeMixerError::recipe(
                "reading flat recipe",
                RecipeErrorKind::InvalidDocument("expected a mapping at the top level".into()),
            ));
        };

        let mut recipe = Self::new();
        recipe.id = fields
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        recipe.name = fields.get("name").and_then(Value::as_str).map(str::to_string);

        for (key, value) in fields {
            if key == "id" || key == "name" || key.ends_with("Amount") || key.ends_with("Brand") {
                continue;
            }
            let Some(selected) = value.as_str() else {
                return Err(CoffeeMixerError::recipe(
                    "reading flat recipe",
                    RecipeErrorKind::InvalidDocument(format!(
                        "field '{key}' must be a string option value"
                    )),
                ));
            };

            let amount = match fields.get(&format!("{key}Amount")) {
                None | Some(Value::Null) => 0.0,
                Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
                Some(other) => {
                    return Err(CoffeeMixerError::recipe(
                        "reading flat recipe",
                        RecipeErrorKind::InvalidDocument(format!(
                            "field '{key}Amount' must be a number, got {other}"
                        )),
                    ))
                }
            };
            let brand = fields
                .get(&format!("{key}Brand"))
                .and_then(Value::as_str)
                .filter(|b| !b.is_empty())
                .map(str::to_string);

            recipe.selections.insert(
                key.clone(),
                Selection {
                    value: selected.to_string(),
                    amount,
                    brand,
                },
            );
        }

        Ok(recipe)
    }
}
