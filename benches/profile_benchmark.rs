//! Benchmarks for flavor profile scoring.
//!
//! The editor recomputes the profile on every change, so single-recipe
//! scoring is the hot path; batch scoring covers `random --count`.

use coffee_mixer::catalog::Catalog;
use coffee_mixer::editor::{default_recipe, Randomizer, RecipeEditor};
use coffee_mixer::scoring::{compute_breakdown, compute_flavor_profile, FlavorScorer};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_single_recipe(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let recipe = Randomizer::seeded(catalog, 1).generate();

    c.bench_function("compute_flavor_profile", |b| {
        b.iter(|| compute_flavor_profile(black_box(&recipe), black_box(catalog)));
    });

    c.bench_function("compute_breakdown", |b| {
        b.iter(|| compute_breakdown(black_box(&recipe), black_box(catalog)));
    });
}

fn bench_edit_and_rescore(c: &mut Criterion) {
    let catalog = Catalog::builtin();

    c.bench_function("edit_amount_and_rescore", |b| {
        let mut editor = RecipeEditor::with_recipe(catalog, default_recipe(catalog));
        let mut amount = 10.0;
        b.iter(|| {
            amount = if amount >= 24.0 { 10.0 } else { amount + 1.0 };
            let _ = editor.set_amount("coffeeBeans", black_box(amount));
            black_box(editor.profile())
        });
    });
}

fn bench_score_many(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let scorer = FlavorScorer::new(catalog);
    let mut group = c.benchmark_group("score_many");

    for size in [10usize, 100, 1000] {
        let mut randomizer = Randomizer::seeded(catalog, size as u64);
        let recipes: Vec<_> = (0..size).map(|_| randomizer.generate()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &recipes, |b, recipes| {
            b.iter(|| scorer.score_many(black_box(recipes)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_recipe,
    bench_edit_and_rescore,
    bench_score_many
);
criterion_main!(benches);
