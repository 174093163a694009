//! Benchmarks for growth period detection.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndvi_phenology::core::NdviSeries;
use ndvi_phenology::detection::{
    detect_growth_periods, detect_growth_periods_values, label_runs, GrowthPeriodConfig,
    PeriodLabel,
};

/// Repeating yearly NDVI curve with a low season between crops.
fn generate_seasons(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let phase = 2.0 * std::f64::consts::PI * i as f64 / 365.0;
            0.35 - 0.3 * phase.cos() + 0.01 * ((i * 7919) % 13) as f64 / 13.0
        })
        .collect()
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth_period_detection");
    let config = GrowthPeriodConfig::default();

    for size in [365, 1_825, 3_650, 36_500].iter() {
        let values = generate_seasons(*size);

        group.bench_with_input(BenchmarkId::new("values", size), size, |b, _| {
            b.iter(|| detect_growth_periods_values(black_box(&values), &config))
        });

        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let series = NdviSeries::daily(start, values.clone()).unwrap();
        group.bench_with_input(BenchmarkId::new("dated", size), size, |b, _| {
            b.iter(|| detect_growth_periods(black_box(&series), &config))
        });
    }

    group.finish();
}

fn bench_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothing_window");
    let values = generate_seasons(3_650);

    for window in [1, 3, 7, 15, 31].iter() {
        let config = GrowthPeriodConfig::default().smoothing_window(*window);
        group.bench_with_input(BenchmarkId::from_parameter(window), window, |b, _| {
            b.iter(|| detect_growth_periods_values(black_box(&values), &config))
        });
    }

    group.finish();
}

fn bench_runs(c: &mut Criterion) {
    let values = generate_seasons(36_500);
    let signals = detect_growth_periods_values(&values, &GrowthPeriodConfig::default()).unwrap();

    c.bench_function("label_runs_harvest", |b| {
        b.iter(|| label_runs(black_box(&signals.labels), PeriodLabel::Harvest, 10))
    });
}

criterion_group!(benches, bench_detection, bench_windows, bench_runs);
criterion_main!(benches);
