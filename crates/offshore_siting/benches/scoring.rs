mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use offshore_siting::prelude::*;

const SITE_COUNTS: [usize; 3] = [10, 100, 1000];

fn synthetic_sites(count: usize) -> Vec<Site> {
    const LEVELS: [&str; 5] = ["low", "medium", "high", "critical", "unrated"];
    (0..count)
        .map(|i| {
            let f = i as f64;
            Site::new(
                format!("site-{i}"),
                format!("Site {i}"),
                Coordinates::new(50.0 + (f * 0.37) % 10.0, -5.0 + (f * 0.91) % 20.0),
            )
            .with_water_depth((f * 7.0) % 200.0)
            .with_port_distance((f * 13.0) % 250.0)
            .with_grid_distance((f * 17.0) % 250.0)
            .with_capex(2.5 + (f * 0.11) % 3.0)
            .with_environmental_impact(LEVELS[i % LEVELS.len()])
        })
        .collect()
}

fn scoring_benches(c: &mut Criterion) {
    let scorer = FeasibilityScorer::default();
    let mut group = c.benchmark_group("scoring/score_all");

    for &count in &SITE_COUNTS {
        let sites = synthetic_sites(count);
        group.throughput(common::elements_throughput(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &sites, |b, sites| {
            b.iter(|| {
                let scores = scorer.score_all(black_box(sites));
                black_box(scores.len());
            });
        });
    }

    group.finish();
}

fn catalog_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/search");

    for &count in &SITE_COUNTS {
        let catalog = SiteCatalog::new(synthetic_sites(count));
        let query = SiteQuery::new()
            .with_max_water_depth(120.0)
            .with_sort(SortKey::WaterDepth)
            .with_limit(10);
        group.throughput(common::elements_throughput(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &query, |b, query| {
            b.iter(|| {
                let hits = catalog.search(black_box(query));
                black_box(hits.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = scoring_benches, catalog_benches
}
criterion_main!(benches);
