// ABOUTME: Shared test fixtures: a scripted LLM provider and sample data builders
// ABOUTME: The mock records every request so tests can assert on prompts and call counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, missing_docs, clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use titanfit::errors::{AppError, AppResult, ErrorCode};
use titanfit::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use titanfit::models::BodyMetric;
use tokio::sync::Notify;

/// What the mock does when `complete` is called
pub enum Behavior {
    Reply(String),
    Fail(ErrorCode),
    /// Wait for the gate to open, then reply
    Gated { gate: Arc<Notify>, text: String },
}

pub struct MockProvider {
    behavior: Behavior,
    capabilities: LlmCapabilities,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            capabilities: LlmCapabilities::structured(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(text.into()))
    }

    pub fn failing(code: ErrorCode) -> Self {
        Self::with_behavior(Behavior::Fail(code))
    }

    pub fn gated(gate: Arc<Notify>, text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Gated {
            gate,
            text: text.into(),
        })
    }

    pub fn text_only(mut self) -> Self {
        self.capabilities = LlmCapabilities::text_only();
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

fn response(text: &str) -> ChatResponse {
    ChatResponse {
        content: text.to_owned(),
        model: "mock-model".to_owned(),
        usage: None,
        finish_reason: Some("STOP".to_owned()),
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match &self.behavior {
            Behavior::Reply(text) => Ok(response(text)),
            Behavior::Fail(code) => Err(AppError::new(*code, "mock failure")),
            Behavior::Gated { gate, text } => {
                gate.notified().await;
                Ok(response(text))
            }
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Measurement at midnight UTC on the given day
pub fn metric_on(year: i32, month: u32, day: u32, weight: f64) -> BodyMetric {
    BodyMetric::new(
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
        weight,
    )
}

/// Schema-conforming plan document with `days` training days
pub fn sample_plan_json(days: usize) -> String {
    let days: Vec<_> = (0..days)
        .map(|i| {
            json!({
                "dayName": format!("Treino {}", char::from(b'A' + i as u8)),
                "focus": "Peito e Tríceps",
                "exercises": [
                    { "name": "Supino Reto", "sets": 4, "reps": "8-12", "notes": "Controle a descida" },
                    { "name": "Tríceps Corda", "sets": 3, "reps": "12" }
                ]
            })
        })
        .collect();

    json!({
        "id": "model-chosen-id",
        "name": "Hipertrofia ABCD",
        "goal": "Hipertrofia",
        "days": days
    })
    .to_string()
}
