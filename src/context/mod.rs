// ABOUTME: Application context owning the stores, the coach backend, and in-flight flags
// ABOUTME: Created once at startup and passed explicitly to the views; dropped on exit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Application Context
//!
//! `AppContext` is the single owner of mutable application state. It relays
//! the four user intents (add metric, delete metric, send chat message,
//! generate plan) into the stores and the coach backend.
//!
//! Store locks are never held across a remote call, so a chat message and a
//! plan generation can be in flight at the same time. A second request of the
//! same kind is rejected while the first is pending.

mod in_flight;

pub use in_flight::{InFlight, InFlightGuard};

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::coach::{AdviceSource, CoachBackend, CoachContext, LlmCoach};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{BodyMetric, ChatMessage, PlanRequest, WeightChange, WorkoutPlan};
use crate::store::{ChatTranscript, MetricStore, PlanStore};

/// Coach reply appended to the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    /// The message as stored in the transcript
    pub message: ChatMessage,
    /// Whether the text came from the model or is a placeholder
    pub source: AdviceSource,
}

/// Shared application state
pub struct AppContext {
    metrics: RwLock<MetricStore>,
    plan: RwLock<PlanStore>,
    transcript: RwLock<ChatTranscript>,
    coach: Arc<dyn CoachBackend>,
    chat_in_flight: InFlight,
    plan_in_flight: InFlight,
}

impl AppContext {
    /// Create a context with empty stores
    #[must_use]
    pub fn new(coach: Arc<dyn CoachBackend>) -> Self {
        Self {
            metrics: RwLock::new(MetricStore::new()),
            plan: RwLock::new(PlanStore::new()),
            transcript: RwLock::new(ChatTranscript::new()),
            coach,
            chat_in_flight: InFlight::new(),
            plan_in_flight: InFlight::new(),
        }
    }

    /// Create a context whose coach is built from startup configuration
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(LlmCoach::from_config(config)))
    }

    /// Seed the metric store
    #[must_use]
    pub fn with_metrics(self, metrics: impl IntoIterator<Item = BodyMetric>) -> Self {
        Self {
            metrics: RwLock::new(metrics.into_iter().collect()),
            ..self
        }
    }

    // ========================================================================
    // Metrics
    // ========================================================================

    /// Record a measurement, returning its id
    pub async fn add_metric(&self, metric: BodyMetric) -> Uuid {
        let id = metric.id;
        self.metrics.write().await.add(metric);
        id
    }

    /// Delete a measurement; absent ids are a no-op
    pub async fn delete_metric(&self, id: Uuid) -> bool {
        self.metrics.write().await.remove(id)
    }

    /// Snapshot of all measurements, oldest first
    pub async fn metrics(&self) -> Vec<BodyMetric> {
        self.metrics.read().await.list().to_vec()
    }

    /// Snapshot of the metric store
    pub async fn metric_store(&self) -> MetricStore {
        self.metrics.read().await.clone()
    }

    /// Change since the previous measurement
    pub async fn weight_change(&self) -> WeightChange {
        self.metrics.read().await.weight_change()
    }

    // ========================================================================
    // Plan
    // ========================================================================

    /// The current plan, if any
    pub async fn current_plan(&self) -> Option<WorkoutPlan> {
        self.plan.read().await.current().cloned()
    }

    /// Generate a plan and make it current
    ///
    /// Returns `Ok(None)` when generation is unavailable; the current plan is
    /// left untouched in that case and on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is missing, a plan request is already
    /// in flight, or the coach backend fails.
    #[instrument(skip(self, request), fields(goal = %request.goal, days = request.days_per_week))]
    pub async fn generate_plan(&self, request: &PlanRequest) -> AppResult<Option<WorkoutPlan>> {
        if request.goal.trim().is_empty() {
            return Err(AppError::missing_field("goal"));
        }
        if request.level.trim().is_empty() {
            return Err(AppError::missing_field("level"));
        }
        if request.days_per_week == 0 {
            return Err(AppError::invalid_input("days per week must be at least 1"));
        }

        let _guard = self
            .plan_in_flight
            .try_acquire()
            .ok_or_else(|| AppError::busy("plan generation"))?;

        let Some(plan) = self.coach.generate_plan(request).await? else {
            return Ok(None);
        };

        let replaced = self.plan.write().await.replace(plan.clone());
        info!(
            plan_id = %plan.id,
            replaced = ?replaced.map(|p| p.id),
            "Current workout plan updated"
        );
        Ok(Some(plan))
    }

    /// Whether a plan request is pending
    #[must_use]
    pub fn is_generating_plan(&self) -> bool {
        self.plan_in_flight.is_set()
    }

    // ========================================================================
    // Coach chat
    // ========================================================================

    /// Snapshot of the coach transcript
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.messages().to_vec()
    }

    /// Context blob the next chat message would carry
    pub async fn coach_context(&self) -> CoachContext {
        let metrics = self.metrics.read().await;
        let plan = self.plan.read().await;
        CoachContext::snapshot(metrics.latest(), plan.current())
    }

    /// Send a message to the coach and append both turns to the transcript
    ///
    /// # Errors
    ///
    /// Returns an error if the message is blank or a chat request is
    /// already in flight. Remote failures become a placeholder reply.
    #[instrument(skip_all, fields(message_len = text.len()))]
    pub async fn send_chat_message(&self, text: &str) -> AppResult<ChatTurn> {
        if text.trim().is_empty() {
            return Err(AppError::missing_field("message"));
        }

        let _guard = self
            .chat_in_flight
            .try_acquire()
            .ok_or_else(|| AppError::busy("chat"))?;

        let user_message = ChatMessage::user(text);
        self.transcript.write().await.push(user_message.clone());

        let context = self.coach_context().await;
        let reply = self.coach.advise(&user_message.text, &context).await;

        let message = ChatMessage::model(reply.text);
        self.transcript.write().await.push(message.clone());

        Ok(ChatTurn {
            message,
            source: reply.source,
        })
    }

    /// Whether a chat request is pending
    #[must_use]
    pub fn is_chatting(&self) -> bool {
        self.chat_in_flight.is_set()
    }
}
