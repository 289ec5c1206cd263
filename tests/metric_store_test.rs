// ABOUTME: Tests for the metric store ordering, removal, and weight change indicator
// ABOUTME: Covers insertion-order independence and the two-measurement change rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test files don't require documentation - this is a rustc lint (not clippy)
#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]

mod common;

use common::metric_on;
use titanfit::models::{Trend, WeightChange};
use titanfit::store::MetricStore;
use uuid::Uuid;

fn dates(store: &MetricStore) -> Vec<String> {
    store
        .list()
        .iter()
        .map(|m| m.date.format("%Y-%m-%d").to_string())
        .collect()
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_store_is_sorted_for_every_insertion_order() {
    let samples = [
        metric_on(2023, 10, 1, 80.5),
        metric_on(2023, 10, 15, 79.8),
        metric_on(2023, 11, 1, 79.0),
    ];
    let orders = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for order in orders {
        let mut store = MetricStore::new();
        for i in order {
            store.add(samples[i].clone());
        }
        assert_eq!(
            dates(&store),
            ["2023-10-01", "2023-10-15", "2023-11-01"],
            "insertion order {order:?}"
        );
    }
}

#[test]
fn test_out_of_order_days_are_stored_by_date() {
    let mut store = MetricStore::new();
    store.add(metric_on(2023, 10, 1, 80.5));
    store.add(metric_on(2023, 10, 3, 79.0));
    store.add(metric_on(2023, 10, 2, 79.8));

    let weights: Vec<f64> = store.list().iter().map(|m| m.weight).collect();
    assert_eq!(weights, [80.5, 79.8, 79.0]);
}

#[test]
fn test_backdated_metric_lands_in_the_middle() {
    let mut store: MetricStore = [
        metric_on(2023, 10, 1, 80.5),
        metric_on(2023, 11, 1, 79.0),
    ]
    .into_iter()
    .collect();

    store.add(metric_on(2023, 10, 15, 79.8));

    assert_eq!(store.len(), 3);
    assert_eq!(store.list()[1].weight, 79.8);
    assert_eq!(store.latest().unwrap().weight, 79.0);
}

#[test]
fn test_same_date_keeps_insertion_order() {
    let mut store = MetricStore::new();
    let first = metric_on(2023, 10, 1, 80.0);
    let second = metric_on(2023, 10, 1, 81.0);
    let (first_id, second_id) = (first.id, second.id);

    store.add(first);
    store.add(second);

    assert_eq!(store.list()[0].id, first_id);
    assert_eq!(store.list()[1].id, second_id);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_remove_is_idempotent() {
    let metric = metric_on(2023, 10, 1, 80.5);
    let id = metric.id;
    let mut store: MetricStore = [metric, metric_on(2023, 10, 15, 79.8)].into_iter().collect();

    assert!(store.remove(id));
    assert_eq!(store.len(), 1);
    assert!(store.get(id).is_none());

    assert!(!store.remove(id));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_unknown_id_is_a_noop() {
    let mut store: MetricStore = [metric_on(2023, 10, 1, 80.5)].into_iter().collect();
    assert!(!store.remove(Uuid::new_v4()));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_add_then_delete_scenario() {
    let mut store: MetricStore = [
        metric_on(2023, 10, 1, 80.5),
        metric_on(2023, 10, 15, 79.8),
        metric_on(2023, 11, 1, 79.0),
        metric_on(2023, 11, 15, 78.5),
    ]
    .into_iter()
    .collect();

    let added = metric_on(2023, 11, 20, 78.2);
    let added_id = added.id;
    store.add(added);
    assert_eq!(store.len(), 5);
    assert_eq!(store.latest().unwrap().weight, 78.2);

    let change = store.weight_change();
    assert_eq!(change.direction, Trend::Down);
    assert_eq!(change.to_string(), "0.3");

    assert!(store.remove(added_id));
    assert_eq!(store.len(), 4);
    assert_eq!(store.latest().unwrap().weight, 78.5);
}

// ============================================================================
// Weight change
// ============================================================================

#[test]
fn test_weight_change_is_flat_with_fewer_than_two_metrics() {
    let empty = MetricStore::new();
    assert_eq!(empty.weight_change(), WeightChange::flat());

    let single: MetricStore = [metric_on(2023, 10, 1, 80.5)].into_iter().collect();
    assert_eq!(single.weight_change().direction, Trend::Flat);
    assert_eq!(single.weight_change().amount, 0.0);
}

#[test]
fn test_weight_change_direction() {
    let up: MetricStore = [metric_on(2023, 10, 1, 78.0), metric_on(2023, 10, 2, 79.5)]
        .into_iter()
        .collect();
    assert_eq!(up.weight_change().direction, Trend::Up);
    assert_eq!(up.weight_change().to_string(), "1.5");

    let same: MetricStore = [metric_on(2023, 10, 1, 78.0), metric_on(2023, 10, 2, 78.0)]
        .into_iter()
        .collect();
    assert_eq!(same.weight_change().direction, Trend::Flat);
}

#[test]
fn test_weight_change_uses_date_order_not_insertion_order() {
    let mut store = MetricStore::new();
    store.add(metric_on(2023, 11, 15, 78.5));
    store.add(metric_on(2023, 11, 1, 79.0));

    let change = store.weight_change();
    assert_eq!(change.direction, Trend::Down);
    assert_eq!(change.to_string(), "0.5");
}

#[test]
fn test_weight_series_follows_store_order() {
    let store: MetricStore = [metric_on(2023, 11, 1, 79.0), metric_on(2023, 10, 1, 80.5)]
        .into_iter()
        .collect();
    let weights: Vec<f64> = store.weight_series().into_iter().map(|(_, w)| w).collect();
    assert_eq!(weights, [80.5, 79.0]);
}
