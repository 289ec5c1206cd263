// ABOUTME: Ordered collection of body measurements kept sorted ascending by date
// ABOUTME: Supports append with re-sort, idempotent removal, and derived weight change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::models::{BodyMetric, WeightChange};

/// Body measurements sorted ascending by date
#[derive(Debug, Clone, Default)]
pub struct MetricStore {
    metrics: Vec<BodyMetric>,
}

impl MetricStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            metrics: Vec::new(),
        }
    }

    /// Insert a measurement and re-sort by date
    ///
    /// Measurements sharing a date keep their insertion order.
    pub fn add(&mut self, metric: BodyMetric) {
        debug!(metric_id = %metric.id, date = %metric.date, "Adding body metric");
        self.metrics.push(metric);
        self.metrics.sort_by_key(|m| m.date);
    }

    /// Delete the measurement with `id`; absent ids are a no-op
    ///
    /// Returns whether a measurement was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let Some(index) = self.metrics.iter().position(|m| m.id == id) else {
            return false;
        };
        self.metrics.remove(index);
        debug!(metric_id = %id, "Removed body metric");
        true
    }

    /// All measurements, oldest first
    #[must_use]
    pub fn list(&self) -> &[BodyMetric] {
        &self.metrics
    }

    /// Look up a measurement by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&BodyMetric> {
        self.metrics.iter().find(|m| m.id == id)
    }

    /// Most recent measurement
    #[must_use]
    pub fn latest(&self) -> Option<&BodyMetric> {
        self.metrics.last()
    }

    /// Measurement before the most recent one
    #[must_use]
    pub fn previous(&self) -> Option<&BodyMetric> {
        self.metrics.len().checked_sub(2).map(|i| &self.metrics[i])
    }

    /// Number of measurements
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Change since the previous measurement; flat with fewer than two
    #[must_use]
    pub fn weight_change(&self) -> WeightChange {
        match (self.latest(), self.previous()) {
            (Some(latest), Some(previous)) => WeightChange::between(latest.weight, previous.weight),
            _ => WeightChange::flat(),
        }
    }

    /// `(date, weight)` points for charting, oldest first
    #[must_use]
    pub fn weight_series(&self) -> Vec<(DateTime<Utc>, f64)> {
        self.metrics.iter().map(|m| (m.date, m.weight)).collect()
    }
}

impl FromIterator<BodyMetric> for MetricStore {
    fn from_iter<I: IntoIterator<Item = BodyMetric>>(iter: I) -> Self {
        let mut store = Self::new();
        for metric in iter {
            store.add(metric);
        }
        store
    }
}
