//! Recipe and catalog loading.

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::model::Recipe;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

/// Parse recipe text in either YAML or JSON (JSON is read as YAML).
pub fn read_recipe_str(content: &str) -> Result<Recipe> {
    let document: serde_json::Value =
        serde_yaml::from_str(content).context("Recipe is not valid YAML or JSON")?;
    Ok(Recipe::from_document(document)?)
}

/// Load a recipe file, or stdin when `path` is `-`.
///
/// A recipe without a name takes the file stem.
pub fn load_recipe_with_context(path: &Path, quiet: bool) -> Result<Recipe> {
    let from_stdin = path.as_os_str() == "-";
    if !quiet {
        if from_stdin {
            tracing::info!("Reading recipe from stdin");
        } else {
            tracing::info!("Loading recipe: {}", path.display());
        }
    }

    let content = if from_stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read recipe from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file: {}", path.display()))?
    };

    let mut recipe = read_recipe_str(&content)
        .with_context(|| format!("Failed to parse recipe: {}", path.display()))?;

    if recipe.name.is_none() && !from_stdin {
        recipe.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }

    tracing::debug!(
        "Recipe has {} selections ({} active)",
        recipe.selections.len(),
        recipe.active().count()
    );
    Ok(recipe)
}

/// The configured catalog file, or the built-in catalog.
pub fn load_catalog(config: &CatalogConfig) -> Result<Cow<'static, Catalog>> {
    match &config.path {
        Some(path) => {
            let catalog = Catalog::from_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(Catalog::builtin())),
    }
}
