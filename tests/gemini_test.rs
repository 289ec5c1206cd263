// ABOUTME: Tests for the Gemini provider's public surface and failure behavior
// ABOUTME: Drives the real HTTP path against a wiremock server and an unroutable endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test files don't require documentation - this is a rustc lint (not clippy)
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use std::sync::Arc;

use serde_json::{json, Value};
use titanfit::coach::{AdviceSource, CoachBackend, CoachContext, LlmCoach};
use titanfit::constants::llm::{DEFAULT_MODEL, GEMINI_API_BASE_URL};
use titanfit::errors::ErrorCode;
use titanfit::llm::{ChatRequest, GeminiProvider, LlmCapabilities, LlmMessage, LlmProvider};
use titanfit::models::PlanRequest;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::sample_plan_json;

/// Nothing listens on the discard port
const UNREACHABLE: &str = "http://127.0.0.1:9/v1beta";

#[test]
fn test_capabilities() {
    let structured = LlmCapabilities::structured();
    assert!(structured.supports_json_mode());
    assert!(structured.supports_system_messages());

    let text = LlmCapabilities::text_only();
    assert!(!text.supports_json_mode());
    assert!(text.supports_system_messages());
}

#[test]
fn test_provider_metadata() {
    let provider = GeminiProvider::new("test-key");
    assert_eq!(provider.name(), "gemini");
    assert_eq!(provider.display_name(), "Google Gemini");
    assert_eq!(provider.default_model(), DEFAULT_MODEL);
    assert_eq!(provider.base_url(), GEMINI_API_BASE_URL);
    assert!(provider.capabilities().supports_json_mode());
}

#[test]
fn test_provider_overrides() {
    let provider = GeminiProvider::new("test-key")
        .with_default_model("gemini-2.5-pro")
        .with_base_url("http://localhost:8089/v1beta/");
    assert_eq!(provider.default_model(), "gemini-2.5-pro");
    assert_eq!(provider.base_url(), "http://localhost:8089/v1beta");
}

#[test]
fn test_debug_output_hides_key() {
    let provider = GeminiProvider::new("very-secret-key");
    let debug = format!("{provider:?}");
    assert!(!debug.contains("very-secret-key"));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_unavailable_error() {
    let provider = GeminiProvider::new("test-key").with_base_url(UNREACHABLE);
    let request = ChatRequest::new(vec![LlmMessage::user("Oi")]);

    let err = provider.complete(&request).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn test_coach_over_unreachable_endpoint() {
    let provider = Arc::new(GeminiProvider::new("test-key").with_base_url(UNREACHABLE));
    let coach = LlmCoach::new(provider);

    let plan = coach
        .generate_plan(&PlanRequest::new("Força", "Avançado", 5))
        .await;
    assert!(plan.is_err());

    let reply = coach
        .advise("Oi", &CoachContext::snapshot(None, None))
        .await;
    assert_eq!(
        reply.source,
        AdviceSource::Failed {
            code: ErrorCode::ExternalServiceUnavailable
        }
    );
}

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn provider_for(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new("test-key").with_base_url(format!("{}/v1beta", server.uri()))
}

fn candidate_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 340, "totalTokenCount": 460 }
    })
}

#[tokio::test]
async fn test_plan_generation_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(&sample_plan_json(4))))
        .expect(1)
        .mount(&server)
        .await;

    let coach = LlmCoach::new(Arc::new(provider_for(&server)));
    let plan = coach
        .generate_plan(&PlanRequest::new("Hipertrofia", "Intermediário", 4))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(plan.days.len(), 4);
    assert_eq!(plan.goal, "Hipertrofia");

    let received = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&received[0].body).unwrap();
    let config = &body["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    assert!(config["responseSchema"].is_object());
    assert!(config["temperature"].is_number());
}

#[tokio::test]
async fn test_advice_over_http_uses_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("Beba água e durma bem.")))
        .expect(1)
        .mount(&server)
        .await;

    let coach = LlmCoach::new(Arc::new(provider_for(&server)));
    let reply = coach
        .advise("Como recuperar?", &CoachContext::snapshot(None, None))
        .await;

    assert_eq!(reply.source, AdviceSource::Model);
    assert_eq!(reply.text, "Beba água e durma bem.");

    let received = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert!(body["generationConfig"]["responseSchema"].is_null());
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limited_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Quota exceeded. Please retry in 6.4s.", "status": "RESOURCE_EXHAUSTED" }
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let request = ChatRequest::new(vec![LlmMessage::user("Oi")]);
    let err = provider.complete(&request).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
    assert!(err.to_string().contains("7 seconds"));
}

#[tokio::test]
async fn test_rejected_key_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "API key not valid." }
        })))
        .mount(&server)
        .await;

    let request = ChatRequest::new(vec![LlmMessage::user("Oi")]);
    let err = provider_for(&server).complete(&request).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn test_server_error_degrades_advice_and_fails_plan() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(2)
        .mount(&server)
        .await;

    let coach = LlmCoach::new(Arc::new(provider_for(&server)));

    let reply = coach
        .advise("Oi", &CoachContext::snapshot(None, None))
        .await;
    assert_eq!(
        reply.source,
        AdviceSource::Failed {
            code: ErrorCode::ExternalServiceError
        }
    );

    let plan = coach
        .generate_plan(&PlanRequest::new("Hipertrofia", "Intermediário", 4))
        .await;
    assert_eq!(plan.unwrap_err().code, ErrorCode::ExternalServiceError);
}
