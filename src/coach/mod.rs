// ABOUTME: Coach capability interface with plan generation and conversational advice
// ABOUTME: LlmCoach implements it over any LlmProvider and degrades to disabled without a key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coach
//!
//! The application depends on [`CoachBackend`], never on a concrete model
//! client. [`LlmCoach`] is the production implementation:
//!
//! - **Plan generation** propagates remote and parse failures as `AppError`
//!   and returns `Ok(None)` when no credential is configured.
//! - **Advice** always produces a reply bubble; the [`AdviceSource`] records
//!   whether the text came from the model or is a placeholder.

mod advice;
mod context;
mod plan;
mod schema;

pub use advice::{AdviceReply, AdviceSource};
pub use context::{CoachContext, LatestStats};
pub use plan::parse_plan_response;
pub use schema::workout_plan_schema;

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::AppConfig;
use crate::constants::llm::PLAN_TEMPERATURE;
use crate::errors::AppResult;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::models::{PlanRequest, WorkoutPlan};

/// Capability interface for the two remote coaching operations
#[async_trait]
pub trait CoachBackend: Send + Sync {
    /// Generate a workout plan
    ///
    /// Returns `Ok(None)` when generation is unavailable.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote call fails or the response does not
    /// parse as a plan. The caller decides whether to let the user retry.
    async fn generate_plan(&self, request: &PlanRequest) -> AppResult<Option<WorkoutPlan>>;

    /// Answer a user message given a snapshot of their data
    async fn advise(&self, message: &str, context: &CoachContext) -> AdviceReply;
}

/// Coach backed by a remote LLM provider
#[derive(Clone)]
pub struct LlmCoach {
    provider: Option<Arc<dyn LlmProvider>>,
    model: Option<String>,
    plan_temperature: f32,
}

impl LlmCoach {
    /// Create a coach that sends requests to `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
            model: None,
            plan_temperature: PLAN_TEMPERATURE,
        }
    }

    /// Create a coach with no credential; every call degrades without touching the network
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            provider: None,
            model: None,
            plan_temperature: PLAN_TEMPERATURE,
        }
    }

    /// Build the coach from startup configuration
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let Some(api_key) = config.api_key() else {
            info!("No Gemini API key configured; coach features are disabled");
            return Self::disabled();
        };

        let provider = GeminiProvider::new(api_key)
            .with_base_url(&config.llm.base_url)
            .with_default_model(&config.llm.model);

        info!(
            model = %config.llm.model,
            "Coach enabled with {}",
            provider.display_name()
        );

        Self::new(Arc::new(provider)).with_plan_temperature(config.llm.plan_temperature)
    }

    /// Override the model for every request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the plan generation temperature
    #[must_use]
    pub const fn with_plan_temperature(mut self, temperature: f32) -> Self {
        self.plan_temperature = temperature;
        self
    }

    /// Whether a provider is configured
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// The configured provider, if any
    #[must_use]
    pub fn provider(&self) -> Option<&dyn LlmProvider> {
        self.provider.as_deref()
    }
}

#[async_trait]
impl CoachBackend for LlmCoach {
    async fn generate_plan(&self, request: &PlanRequest) -> AppResult<Option<WorkoutPlan>> {
        self.generate_workout_plan(request).await
    }

    async fn advise(&self, message: &str, context: &CoachContext) -> AdviceReply {
        self.get_coach_advice(message, &context.to_blob()).await
    }
}

impl Debug for LlmCoach {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LlmCoach")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("model", &self.model)
            .field("plan_temperature", &self.plan_temperature)
            .finish()
    }
}
