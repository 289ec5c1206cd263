// ABOUTME: Defaults for the hosted generative-model endpoint
// ABOUTME: Endpoint base URL, default model identifier, and plan sampling temperature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Base URL for the Gemini API
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for both plan generation and coach advice
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Sampling temperature for plan generation
pub const PLAN_TEMPERATURE: f32 = 0.7;

/// MIME type requested for structured plan responses
pub const JSON_MIME_TYPE: &str = "application/json";
