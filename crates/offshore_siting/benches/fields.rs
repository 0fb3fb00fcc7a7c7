mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use offshore_siting::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const STEPS: [f64; 3] = [0.5, 0.25, 0.1];

fn bench_sites() -> Vec<Site> {
    (0..8u8)
        .map(|i| {
            let f = f64::from(i);
            Site::new(
                format!("site-{i}"),
                format!("Site {i}"),
                Coordinates::new(52.0 + f, -4.0 + 2.5 * f),
            )
            .with_water_depth(20.0 + 15.0 * f)
            .with_overall_score(60 + 4 * i)
        })
        .collect()
}

fn wind_field_benches(c: &mut Criterion) {
    let sites = bench_sites();
    let mut group = c.benchmark_group("fields/wind");

    for &step in &STEPS {
        let generator = WindFieldGenerator::new(FieldConfig::default().with_step(step), WindFieldParams::default());
        let expected = generator
            .generate(&sites, 1.0, &mut HashNoise::new(1.0), &mut HashNoise::new(9.0))
            .len();
        group.throughput(common::elements_throughput(expected));

        group.bench_with_input(BenchmarkId::from_parameter(step), &step, |b, _| {
            b.iter(|| {
                let field = generator.generate(
                    black_box(&sites),
                    0.8,
                    &mut HashNoise::new(2.0),
                    &mut HashNoise::new(9.0),
                );
                black_box(field.len());
            });
        });
    }

    group.finish();
}

fn depth_field_benches(c: &mut Criterion) {
    let sites = bench_sites();
    let mut group = c.benchmark_group("fields/depth");

    for &step in &STEPS {
        let generator = DepthFieldGenerator::new(FieldConfig::default().with_step(step), DepthFieldParams::default());
        let mut rng_est = RngNoise::new(StdRng::seed_from_u64(0xDE97));
        let expected = generator.generate(&sites, &mut rng_est).len();
        group.throughput(common::elements_throughput(expected));

        let mut noise = RngNoise::new(StdRng::seed_from_u64(0x5EA));
        group.bench_with_input(BenchmarkId::from_parameter(step), &step, |b, _| {
            b.iter(|| {
                let samples = generator.generate(black_box(&sites), &mut noise);
                black_box(samples.len());
            });
        });
    }

    group.finish();
}

fn scenario_benches(c: &mut Criterion) {
    let sites = bench_sites();
    let generator = WindFieldGenerator::default();
    let reference = MonthPeriod::new(2026, 10).expect("valid month");

    c.bench_function("fields/wind_scenarios", |b| {
        b.iter(|| {
            let batch = generate_wind_scenarios(
                &generator,
                black_box(&sites),
                reference,
                &mut HashNoise::new(7.0),
            );
            black_box(batch.len());
        });
    });
}

criterion_group! {
    name = benches;
    config = common::sweep_criterion();
    targets = wind_field_benches, depth_field_benches, scenario_benches
}
criterion_main!(benches);
