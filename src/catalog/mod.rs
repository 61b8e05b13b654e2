//! Ingredient catalog.
//!
//! The [`Catalog`] is the static, read-only registry of categories, options
//! and brands that recipes reference by value. It is loaded once and passed
//! by reference to the scorer and the editor.
//!
//! # Example
//!
//! ```
//! use coffee_mixer::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let arabica = catalog.lookup_option("coffeeBeans", "arabica").unwrap();
//! assert_eq!(arabica.label, "Arabica");
//! ```

mod builtin;
mod validation;

pub use validation::is_valid_color;

use crate::error::{CatalogErrorKind, CoffeeMixerError, ErrorContext, Result};
use crate::model::{BrandOption, Category, IngredientOption, NONE_VALUE};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog format versions this build understands (major version).
pub const SUPPORTED_CATALOG_MAJOR: &str = "1";

/// Minimum normalized similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.5;

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default = "default_version")]
    version: String,
    categories: IndexMap<String, Category>,
}

fn default_version() -> String {
    format!("{SUPPORTED_CATALOG_MAJOR}.0")
}

/// Registry of ingredient categories, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct Catalog {
    version: String,
    categories: IndexMap<String, Category>,
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CoffeeMixerError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        let major = file.version.split('.').next().unwrap_or_default();
        if major != SUPPORTED_CATALOG_MAJOR {
            return Err(CoffeeMixerError::catalog(
                "checking catalog version",
                CatalogErrorKind::UnsupportedVersion {
                    version: file.version,
                    supported: format!("{SUPPORTED_CATALOG_MAJOR}.x"),
                },
            ));
        }

        let categories = file
            .categories
            .into_iter()
            .map(|(name, mut category)| {
                category.name.clone_from(&name);
                (name, category)
            })
            .collect();

        Ok(Self {
            version: file.version,
            categories,
        })
    }
}

impl From<Catalog> for CatalogFile {
    fn from(catalog: Catalog) -> Self {
        Self {
            version: catalog.version,
            categories: catalog.categories,
        }
    }
}

impl Catalog {
    /// Build a catalog from categories (names taken from each category).
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            version: default_version(),
            categories: categories
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
        }
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> &'static Self {
        builtin::builtin_catalog()
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            CoffeeMixerError::catalog(
                "parsing JSON catalog",
                CatalogErrorKind::InvalidJson(e.to_string()),
            )
        })
    }

    /// Parse a catalog from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            CoffeeMixerError::catalog(
                "parsing YAML catalog",
                CatalogErrorKind::InvalidYaml(e.to_string()),
            )
        })
    }

    /// Load a catalog file, choosing the parser by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content =
            std::fs::read_to_string(path).map_err(|e| CoffeeMixerError::io(path, e))?;

        let catalog = match extension.as_str() {
            "json" => Self::from_json(&content),
            "yaml" | "yml" => Self::from_yaml(&content),
            other => Err(CoffeeMixerError::catalog(
                "detecting catalog format",
                CatalogErrorKind::UnsupportedExtension(other.to_string()),
            )),
        }
        .with_context(|| format!("loading catalog {}", path.display()))?;

        tracing::debug!(
            "Loaded catalog {} ({} categories, {} options)",
            path.display(),
            catalog.categories.len(),
            catalog.option_count()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Category keys in declaration order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    #[must_use]
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Total number of options across all categories.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.categories.values().map(|c| c.options.len()).sum()
    }

    /// Resolve an option by category and value.
    ///
    /// Returns `None` for `"none"`, an unknown category or an unknown value.
    /// When a category declares the same value twice, the first one wins.
    #[must_use]
    pub fn lookup_option(&self, category: &str, value: &str) -> Option<&IngredientOption> {
        if value == NONE_VALUE {
            return None;
        }
        self.categories.get(category)?.option(value)
    }

    /// Resolve a brand within an option's brand list.
    #[must_use]
    pub fn lookup_brand<'o>(
        &self,
        option: &'o IngredientOption,
        brand: &str,
    ) -> Option<&'o BrandOption> {
        option.brands.iter().find(|b| b.value == brand)
    }

    /// Closest option values to `value` within a category, best first.
    #[must_use]
    pub fn suggest(&self, category: &str, value: &str, limit: usize) -> Vec<&str> {
        let Some(category) = self.categories.get(category) else {
            return Vec::new();
        };
        let needle = value.to_lowercase();

        let mut scored: Vec<(f64, &str)> = category
            .options
            .iter()
            .map(|o| {
                let score = strsim::normalized_levenshtein(&needle, &o.value.to_lowercase())
                    .max(strsim::normalized_levenshtein(&needle, &o.label.to_lowercase()));
                (score, o.value.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, v)| v).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FlavorDimension, ScoreMap, Unit};

    const SMALL_YAML: &str = r#"
version: "1.0"
categories:
  milk:
    label: Milk
    allows_none: true
    options:
      - label: Whole Milk
        value: whole-milk
        unit: ml
        scores: { sweetness: 1, body: 1 }
        brands:
          - label: Greenfields
            value: greenfields
            scores: { body: 1 }
"#;

    #[test]
    fn test_builtin_has_all_categories() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.category_names().collect();
        assert_eq!(names, crate::model::categories::ALL.to_vec());
        assert!(catalog.option_count() > 100);
    }

    #[test]
    fn test_from_yaml_fills_category_names() {
        let catalog = Catalog::from_yaml(SMALL_YAML).unwrap();
        let milk = catalog.category("milk").unwrap();
        assert_eq!(milk.name, "milk");
        assert!(milk.allows_none);
        assert_eq!(milk.options[0].unit, Unit::Milliliter);
    }

    #[test]
    fn test_lookup_none_and_unknown() {
        let catalog = Catalog::from_yaml(SMALL_YAML).unwrap();
        assert!(catalog.lookup_option("milk", "none").is_none());
        assert!(catalog.lookup_option("milk", "goat-milk").is_none());
        assert!(catalog.lookup_option("tea", "whole-milk").is_none());

        let option = catalog.lookup_option("milk", "whole-milk").unwrap();
        assert_eq!(option.scores.get(FlavorDimension::Sweetness), 1.0);
        assert!(catalog.lookup_brand(option, "greenfields").is_some());
        assert!(catalog.lookup_brand(option, "ultra-milk").is_none());
    }

    #[test]
    fn test_unknown_score_key_is_load_error() {
        let yaml = SMALL_YAML.replace("sweetness: 1", "umami: 1");
        let err = Catalog::from_yaml(&yaml).unwrap_err();
        assert!(matches!(
            err,
            CoffeeMixerError::Catalog {
                source: CatalogErrorKind::InvalidYaml(_),
                ..
            }
        ));
    }

    #[test]
    fn test_unsupported_version() {
        let yaml = SMALL_YAML.replace("\"1.0\"", "\"2.0\"");
        assert!(Catalog::from_yaml(&yaml).is_err());
    }

    #[test]
    fn test_json_roundtrip_keeps_order() {
        let catalog = Catalog::new(vec![
            Category::new(
                "syrup",
                vec![IngredientOption::new("Vanilla", "vanilla", Unit::Milliliter, ScoreMap::new())],
            ),
            Category::new("milk", Vec::new()),
        ]);
        let json = serde_json::to_string(&catalog).unwrap();
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back.category_names().collect::<Vec<_>>(), vec!["syrup", "milk"]);
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_suggest() {
        let catalog = Catalog::builtin();
        let suggestions = catalog.suggest("coffeeBeans", "arabika", 3);
        assert_eq!(suggestions.first().copied(), Some("arabica"));
        assert!(catalog.suggest("coffeeBeans", "zzzzzzzzzzzz", 3).is_empty());
        assert!(catalog.suggest("tea", "arabica", 3).is_empty());
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("catalog.yml");
        std::fs::write(&yaml_path, SMALL_YAML).unwrap();
        assert!(Catalog::from_file(&yaml_path).is_ok());

        let txt_path = dir.path().join("catalog.txt");
        std::fs::write(&txt_path, SMALL_YAML).unwrap();
        let err = Catalog::from_file(&txt_path).unwrap_err();
        assert!(err.to_string().contains("loading catalog"));
    }
}
