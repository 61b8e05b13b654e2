//! Random command handler.

use crate::config::AppConfig;
use crate::editor::Randomizer;
use crate::pipeline::{exit_codes, load_catalog, output_profile_reports};
use crate::reports::ProfileContext;
use anyhow::Result;

/// Generate `count` random recipes and report their profiles.
///
/// Uses the configured taste and, when set, the configured seed.
pub fn run_random(count: usize, config: &AppConfig) -> Result<i32> {
    let catalog = load_catalog(&config.catalog)?;
    let taste = config.random.taste;

    let mut randomizer = match config.random.seed {
        Some(seed) => Randomizer::seeded(&catalog, seed),
        None => Randomizer::new(&catalog),
    }
    .taste(taste);

    let recipes: Vec<_> = (1..=count.max(1))
        .map(|n| {
            let mut recipe = randomizer.generate();
            recipe.name = Some(format!("Random #{n} ({taste})"));
            recipe
        })
        .collect();

    if !config.behavior.quiet {
        tracing::info!("Generated {} {taste} recipe(s)", recipes.len());
    }

    let contexts: Vec<ProfileContext<'_>> = recipes
        .iter()
        .map(|recipe| ProfileContext::new(recipe, &catalog))
        .collect();
    output_profile_reports(&contexts, config)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TastePreference;
    use crate::reports::ReportFormat;

    #[test]
    fn test_run_random_seeded_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let render = |name: &str| {
            let out = dir.path().join(name);
            let config = AppConfig::builder()
                .output_format(ReportFormat::Text)
                .output_file(Some(out.clone()))
                .taste(TastePreference::Sweet)
                .seed(Some(42))
                .build();
            assert_eq!(run_random(3, &config).unwrap(), exit_codes::SUCCESS);
            std::fs::read_to_string(out).unwrap()
        };
        let first = render("a.txt");
        assert_eq!(first, render("b.txt"));
        assert!(first.contains("Coffee Beans:"));
    }

    #[test]
    fn test_run_random_json_batch() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("random.json");
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(out.clone()))
            .seed(Some(7))
            .build();
        run_random(2, &config).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        let profiles = json["profiles"].as_array().unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0]["name"], "Random #1 (random)");
    }
}
