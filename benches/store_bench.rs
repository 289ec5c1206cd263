// ABOUTME: Criterion benchmarks for the metric store and derived view data
// ABOUTME: Measures sorted insertion, weight change, and dashboard rendering as history grows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the metric store.
//!
//! Every insertion re-sorts the history, so these track how that cost grows
//! with the number of measurements.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use titanfit::models::BodyMetric;
use titanfit::store::MetricStore;
use titanfit::views::render_dashboard;

const HISTORY_SIZES: [usize; 4] = [10, 100, 1_000, 5_000];

/// Daily measurements with a slow downward trend
fn generate_history(count: usize) -> Vec<BodyMetric> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 7, 0, 0).unwrap();
    (0..count)
        .map(|day| {
            let weight = 90.0 - (day as f64) * 0.01 + ((day % 7) as f64) * 0.05;
            BodyMetric::new(start + Duration::days(day as i64), weight)
                .with_body_fat(22.0 - (day as f64) * 0.002)
        })
        .collect()
}

fn bench_add_metric(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_store_add");

    for size in HISTORY_SIZES {
        let history = generate_history(size);
        let store: MetricStore = history.into_iter().collect();
        let backdated = BodyMetric::new(Utc.with_ymd_and_hms(2022, 6, 1, 7, 0, 0).unwrap(), 91.0);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("backdated", size), &size, |b, _| {
            b.iter_batched(
                || store.clone(),
                |mut store| {
                    store.add(black_box(backdated.clone()));
                    store
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_collect_unordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_store_collect");

    for size in HISTORY_SIZES {
        let mut history = generate_history(size);
        history.reverse();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("reversed", size), &history, |b, history| {
            b.iter(|| black_box(history.iter().cloned().collect::<MetricStore>()));
        });
    }

    group.finish();
}

fn bench_derived_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_store_views");

    for size in HISTORY_SIZES {
        let store: MetricStore = generate_history(size).into_iter().collect();

        group.bench_with_input(BenchmarkId::new("weight_change", size), &store, |b, store| {
            b.iter(|| black_box(store.weight_change()));
        });
        group.bench_with_input(BenchmarkId::new("dashboard", size), &store, |b, store| {
            b.iter(|| black_box(render_dashboard(store, None)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_metric,
    bench_collect_unordered,
    bench_derived_views
);
criterion_main!(benches);
