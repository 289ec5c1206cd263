// ABOUTME: Dashboard view with weight, body fat, and current plan KPIs plus the weight chart
// ABOUTME: Missing values render as "--" placeholders rather than numeric artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use super::chart::render_weight_chart;
use crate::models::{Trend, WeightChange, WorkoutPlan};
use crate::store::MetricStore;

const PLACEHOLDER: &str = "--";

/// Arrow shown next to the change amount
#[must_use]
pub const fn trend_arrow(direction: Trend) -> &'static str {
    match direction {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Flat => "=",
    }
}

/// "change since previous measurement" line, only when there are two measurements
#[must_use]
pub fn change_line(metrics: &MetricStore) -> Option<String> {
    if metrics.len() < 2 {
        return None;
    }
    let change: WeightChange = metrics.weight_change();
    Some(format!(
        "{} {change} kg desde a última pesagem",
        trend_arrow(change.direction)
    ))
}

/// Render the dashboard
#[must_use]
pub fn render_dashboard(metrics: &MetricStore, plan: Option<&WorkoutPlan>) -> String {
    let latest = metrics.latest();
    let weight = latest.map_or_else(|| PLACEHOLDER.to_owned(), |m| format!("{:.1}", m.weight));
    let body_fat = latest
        .and_then(|m| m.body_fat)
        .map_or_else(|| PLACEHOLDER.to_owned(), |fat| format!("{fat:.1}"));

    let mut out = String::new();
    let _ = writeln!(out, "Peso Atual: {weight} kg");
    if let Some(line) = change_line(metrics) {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out, "Gordura Corporal: {body_fat}%");

    match plan {
        Some(plan) => {
            let _ = writeln!(out, "Treino Atual: {}", plan.name);
            let _ = writeln!(out, "  {} dias por semana", plan.days_per_week());
        }
        None => {
            let _ = writeln!(out, "Treino Atual: Nenhum");
            let _ = writeln!(out, "  Crie um treino agora");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Evolução do Peso");
    let _ = write!(out, "{}", render_weight_chart(&metrics.weight_series()));
    out
}
