// ABOUTME: Workouts view showing the current plan day by day with exercise prescriptions
// ABOUTME: Shows a generation hint when no plan exists yet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use crate::models::WorkoutPlan;

/// Render the current plan
#[must_use]
pub fn render_workouts(plan: Option<&WorkoutPlan>, generating: bool) -> String {
    let mut out = String::new();
    if generating {
        let _ = writeln!(out, "Criando seu plano...");
    }

    let Some(plan) = plan else {
        let _ = write!(
            out,
            "Nenhum treino ativo. Use `plan generate --goal <objetivo> --level <nível> --days <n>`."
        );
        return out;
    };

    let _ = writeln!(out, "{}", plan.name);
    let _ = writeln!(out, "Objetivo: {}", plan.goal);
    for day in &plan.days {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} | {}", day.day_name, day.focus);
        for exercise in &day.exercises {
            let _ = write!(
                out,
                "  - {}: {} x {}",
                exercise.name, exercise.sets, exercise.reps
            );
            if let Some(notes) = exercise.notes.as_deref().filter(|n| !n.is_empty()) {
                let _ = write!(out, " ({notes})");
            }
            let _ = writeln!(out);
        }
    }
    out
}
