// ABOUTME: Plan generation command for the titanfit CLI
// ABOUTME: Runs generation on a background task so the session stays responsive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use titanfit::constants::messages::{PLAN_FAILED, PLAN_UNAVAILABLE};
use titanfit::context::AppContext;
use titanfit::errors::ErrorCode;
use titanfit::models::PlanRequest;
use tracing::error;

use crate::helpers::display::display_plan_ready;

/// Start generating a plan
pub fn generate(
    app: &Arc<AppContext>,
    goal: String,
    level: String,
    days: u8,
    limitations: String,
) {
    if app.is_generating_plan() {
        println!("Um plano já está sendo criado. Aguarde.");
        return;
    }

    let request = PlanRequest::new(goal, level, days).with_limitations(limitations);
    let app = Arc::clone(app);
    println!("Criando seu plano...");

    tokio::spawn(async move {
        match app.generate_plan(&request).await {
            Ok(Some(plan)) => display_plan_ready(&plan),
            Ok(None) => println!("\n{PLAN_UNAVAILABLE}"),
            Err(e) if e.code == ErrorCode::ResourceLocked => {
                println!("\nUm plano já está sendo criado. Aguarde.");
            }
            Err(e) if e.code == ErrorCode::MissingRequiredField || e.code == ErrorCode::InvalidInput => {
                println!("\nError {}", e.message);
            }
            Err(e) => {
                error!(error = %e, "Plan generation failed");
                println!("\n{PLAN_FAILED}");
            }
        }
    });
}
