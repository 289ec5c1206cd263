// ABOUTME: Environment variable names consulted once at process start
// ABOUTME: Credential lookup order and optional model overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Primary credential variable for the Gemini API
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Legacy credential variable, consulted when `GEMINI_API_KEY` is unset
pub const API_KEY: &str = "API_KEY";

/// Model identifier override
pub const LLM_MODEL: &str = "TITANFIT_LLM_MODEL";

/// Endpoint base URL override
pub const LLM_BASE_URL: &str = "TITANFIT_LLM_BASE_URL";

/// Plan generation temperature override
pub const PLAN_TEMPERATURE: &str = "TITANFIT_PLAN_TEMPERATURE";

/// Deployment environment (development, production, testing)
pub const ENVIRONMENT: &str = "ENVIRONMENT";
