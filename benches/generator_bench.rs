//! Benchmarks for the LevelUp snapshot generator
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use levelup::config::GeneratorConfig;
use levelup::dashboard::DashboardGenerator;
use levelup::render_snapshot;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    for weeks in [4, 12, 52] {
        let config = GeneratorConfig {
            heatmap_weeks: weeks,
            chart_days: weeks * 7,
            ..GeneratorConfig::default()
        };
        let generator = DashboardGenerator::new(config).with_seed(42);

        group.throughput(Throughput::Elements((weeks * 7) as u64));

        group.bench_function(format!("seeded_{}_weeks", weeks), |b| {
            b.iter(|| generator.generate_on(black_box(today)))
        });
    }

    group.bench_function("thread_rng_default", |b| {
        let generator = DashboardGenerator::default();
        b.iter(|| generator.generate_on(black_box(today)))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let data = DashboardGenerator::default().with_seed(42).generate();

    c.bench_function("render_snapshot", |b| {
        b.iter(|| render_snapshot(black_box(&data)))
    });
}

criterion_group!(benches, bench_generate, bench_render);
criterion_main!(benches);
