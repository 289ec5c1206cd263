// ABOUTME: Workout plan generation through a schema-constrained model request
// ABOUTME: Parses the JSON reply into a typed plan with a freshly assigned identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Deserialize;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::{workout_plan_schema, LlmCoach};
use crate::errors::{AppError, AppResult};
use crate::llm::prompts::build_plan_prompt;
use crate::llm::{ChatRequest, LlmMessage};
use crate::models::{PlanRequest, WorkoutDay, WorkoutPlan};

/// Plan as returned by the model, before an identifier is assigned
#[derive(Debug, Deserialize)]
struct GeneratedPlan {
    name: String,
    goal: String,
    days: Vec<WorkoutDay>,
}

/// Parse a schema-conforming JSON document into a plan
///
/// Any `id` in the document is ignored; the plan always gets a new one.
///
/// # Errors
///
/// Returns a serialization error if the text is not valid JSON or misses a
/// required field. Malformed JSON is not repaired.
pub fn parse_plan_response(text: &str) -> AppResult<WorkoutPlan> {
    let generated: GeneratedPlan = serde_json::from_str(text).map_err(|e| {
        AppError::serialization(format!("Plan response does not match the schema: {e}"))
            .with_source(e)
    })?;

    Ok(WorkoutPlan {
        id: Uuid::new_v4(),
        name: generated.name,
        goal: generated.goal,
        days: generated.days,
    })
}

impl LlmCoach {
    /// Generate a workout plan for the given parameters
    ///
    /// Exactly one remote attempt is made. The number of days in the reply
    /// is not checked against `days_per_week`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider lacks JSON mode, the remote call
    /// fails, or the reply does not parse.
    #[instrument(skip(self, request), fields(goal = %request.goal, level = %request.level, days = request.days_per_week))]
    pub async fn generate_workout_plan(
        &self,
        request: &PlanRequest,
    ) -> AppResult<Option<WorkoutPlan>> {
        let Some(provider) = self.provider.as_deref() else {
            warn!("Plan generation requested without an API key");
            return Ok(None);
        };

        if !provider.capabilities().supports_json_mode() {
            return Err(AppError::config(format!(
                "{} does not support structured output",
                provider.display_name()
            )));
        }

        let mut chat_request = ChatRequest::new(vec![LlmMessage::user(build_plan_prompt(request))])
            .with_temperature(self.plan_temperature)
            .with_json_schema(workout_plan_schema());
        if let Some(model) = &self.model {
            chat_request = chat_request.with_model(model);
        }

        let response = provider.complete(&chat_request).await.map_err(|e| {
            error!(error = %e, "Plan generation request failed");
            e
        })?;

        if response.content.trim().is_empty() {
            warn!(finish_reason = ?response.finish_reason, "Model returned no plan text");
            return Ok(None);
        }

        let plan = parse_plan_response(&response.content).map_err(|e| {
            error!(error = %e, "Plan generation returned an unparseable document");
            e
        })?;

        info!(
            plan_id = %plan.id,
            days = plan.days.len(),
            exercises = plan.exercise_count(),
            "Generated workout plan"
        );

        Ok(Some(plan))
    }
}
