// ABOUTME: Metrics view listing measurement history newest first with identifiers for deletion
// ABOUTME: Optional readings render as "--" when absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use super::chart::render_weight_chart;
use crate::store::MetricStore;

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "--".to_owned(), |v| format!("{v:.1}"))
}

/// Render the measurement history
#[must_use]
pub fn render_metrics(metrics: &MetricStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Histórico ({} registros)", metrics.len());

    if metrics.is_empty() {
        let _ = write!(out, "Nenhuma medição registrada.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<10}  {:>8}  {:>8}  {:>8}  ID",
        "Data", "Peso", "Gordura", "Massa"
    );
    for metric in metrics.list().iter().rev() {
        let _ = writeln!(
            out,
            "{:<10}  {:>8.1}  {:>8}  {:>8}  {}",
            metric.date.format("%d/%m/%Y"),
            metric.weight,
            optional(metric.body_fat),
            optional(metric.muscle_mass),
            metric.id
        );
    }

    let _ = writeln!(out);
    let _ = write!(out, "{}", render_weight_chart(&metrics.weight_series()));
    out
}
