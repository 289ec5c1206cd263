// ABOUTME: Output formatting helpers for the titanfit CLI
// ABOUTME: Takes state snapshots from AppContext and prints the rendered views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use titanfit::context::{AppContext, ChatTurn};
use titanfit::models::WorkoutPlan;
use titanfit::views::{
    render_coach, render_dashboard, render_metrics, render_navigation, render_workouts, AppView,
};

/// Print the navigation menu and the active view
pub async fn display_view(app: &AppContext, view: AppView) {
    println!("\n{}", render_navigation(view));
    println!("{}", "=".repeat(60));
    println!("{}", view.title());
    println!("{}", "-".repeat(60));

    let body = match view {
        AppView::Dashboard => {
            let metrics = app.metric_store().await;
            let plan = app.current_plan().await;
            render_dashboard(&metrics, plan.as_ref())
        }
        AppView::Workouts => {
            let plan = app.current_plan().await;
            render_workouts(plan.as_ref(), app.is_generating_plan())
        }
        AppView::Metrics => render_metrics(&app.metric_store().await),
        AppView::Coach => render_coach(&app.transcript().await, app.is_chatting()),
    };
    println!("{body}");
}

/// Print the coach reply from a chat exchange
pub fn display_chat_turn(turn: &ChatTurn) {
    println!(
        "[{}] TitanCoach: {}",
        turn.message.timestamp.with_timezone(&Local).format("%H:%M"),
        turn.message.text
    );
}

/// Announce a newly generated plan
pub fn display_plan_ready(plan: &WorkoutPlan) {
    println!("\nSuccess Plano criado: {}", plan.name);
    println!(
        "   {} dias, {} exercícios. Use `view workouts` para ver.",
        plan.days_per_week(),
        plan.exercise_count()
    );
}

/// Print the command reference
pub fn display_help() {
    println!("Comandos:");
    println!("  view <dashboard|workouts|metrics|coach>");
    println!("  metric add <peso> [--fat <%>] [--muscle <kg>] [--date AAAA-MM-DD]");
    println!("  metric rm <id>");
    println!("  plan generate [--goal <objetivo>] [--level <nível>] [--days <n>] [--limitations \"...\"]");
    println!("                (padrão: Hipertrofia, Intermediário, 4 dias)");
    println!("  chat <mensagem>");
    println!("  status");
    println!("  quit");
}
