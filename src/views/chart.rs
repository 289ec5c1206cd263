// ABOUTME: Text charts for weight progress in the dashboard and metrics views
// ABOUTME: Bar lengths use a domain padded 2 kg below the minimum and above the maximum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

const SPARK_TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const BAR_WIDTH: usize = 30;
const DOMAIN_PADDING_KG: f64 = 2.0;

/// One-line trend of `values`
#[must_use]
pub fn sparkline(values: &[f64]) -> String {
    let (min, max) = bounds(values);
    let span = max - min;
    values
        .iter()
        .map(|v| {
            if span <= f64::EPSILON {
                SPARK_TICKS[SPARK_TICKS.len() / 2]
            } else {
                let index = ((v - min) / span * (SPARK_TICKS.len() - 1) as f64).round() as usize;
                SPARK_TICKS[index.min(SPARK_TICKS.len() - 1)]
            }
        })
        .collect()
}

/// Horizontal bar chart of weight over time, one row per measurement
#[must_use]
pub fn render_weight_chart(series: &[(DateTime<Utc>, f64)]) -> String {
    if series.is_empty() {
        return "Sem dados suficientes".to_owned();
    }

    let weights: Vec<f64> = series.iter().map(|(_, w)| *w).collect();
    let (min, max) = bounds(&weights);
    let low = min - DOMAIN_PADDING_KG;
    let span = (max + DOMAIN_PADDING_KG) - low;

    let mut out = String::new();
    for (date, weight) in series {
        let filled = ((weight - low) / span * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "{}  {:>6.1} kg  {}",
            date.format("%d/%m"),
            weight,
            "█".repeat(filled.min(BAR_WIDTH))
        );
    }
    let _ = write!(out, "tendência: {}", sparkline(&weights));
    out
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        })
}
