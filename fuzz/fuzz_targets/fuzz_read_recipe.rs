#![no_main]
use coffee_mixer::catalog::Catalog;
use coffee_mixer::pipeline::read_recipe_str;
use coffee_mixer::scoring::compute_breakdown;
use libfuzzer_sys::fuzz_target;

/// Parse arbitrary recipe text and score whatever parses.
///
/// Scoring must never panic and never produce a negative value.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(recipe) = read_recipe_str(s) {
            let breakdown = compute_breakdown(&recipe, Catalog::builtin());
            assert!(breakdown.profile.iter().all(|(_, v)| v >= 0.0 || v.is_nan()));
        }
    }
});
