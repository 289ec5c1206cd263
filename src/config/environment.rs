// ABOUTME: Startup configuration loaded once from environment variables
// ABOUTME: A missing model credential is a supported state, not a startup failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::{info, warn};

use super::types::Environment;
use crate::constants::env_vars;
use crate::constants::llm::{DEFAULT_MODEL, GEMINI_API_BASE_URL, PLAN_TEMPERATURE};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Remote model settings
#[derive(Clone, PartialEq)]
pub struct LlmConfig {
    /// API credential; `None` disables plan generation and advice
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Endpoint base URL
    pub base_url: String,
    /// Sampling temperature for plan generation
    pub plan_temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            base_url: GEMINI_API_BASE_URL.to_owned(),
            plan_temperature: PLAN_TEMPERATURE,
        }
    }
}

impl Debug for LlmConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("plan_temperature", &self.plan_temperature)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Remote model settings
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// The credential is taken from `GEMINI_API_KEY`, falling back to
    /// `API_KEY`. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `TITANFIT_PLAN_TEMPERATURE` is set but is not a
    /// number in `0.0..=2.0`.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let api_key = non_empty_var(env_vars::GEMINI_API_KEY)
            .or_else(|| non_empty_var(env_vars::API_KEY));
        if api_key.is_none() {
            warn!(
                "{} is not set; plan generation and coach advice are unavailable",
                env_vars::GEMINI_API_KEY
            );
        }

        let plan_temperature = match non_empty_var(env_vars::PLAN_TEMPERATURE) {
            Some(raw) => parse_temperature(&raw)?,
            None => PLAN_TEMPERATURE,
        };

        Ok(Self {
            environment: non_empty_var(env_vars::ENVIRONMENT)
                .map(|s| Environment::from_str_or_default(&s))
                .unwrap_or_default(),
            llm: LlmConfig {
                api_key,
                model: non_empty_var(env_vars::LLM_MODEL)
                    .unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
                base_url: non_empty_var(env_vars::LLM_BASE_URL)
                    .unwrap_or_else(|| GEMINI_API_BASE_URL.to_owned()),
                plan_temperature,
            },
        })
    }

    /// The configured credential, if any
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.llm.api_key.as_deref()
    }

    /// Whether remote coaching features are available
    #[must_use]
    pub const fn coach_enabled(&self) -> bool {
        self.llm.api_key.is_some()
    }

    /// Replace the credential
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.llm.api_key = Some(api_key.into());
        self
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_temperature(raw: &str) -> AppResult<f32> {
    let value: f32 = raw.parse().map_err(|_| {
        AppError::new(
            ErrorCode::ConfigError,
            format!("{} must be a number, got '{raw}'", env_vars::PLAN_TEMPERATURE),
        )
    })?;
    if !(0.0..=2.0).contains(&value) {
        return Err(AppError::config(format!(
            "{} must be between 0.0 and 2.0, got {value}",
            env_vars::PLAN_TEMPERATURE
        )));
    }
    Ok(value)
}
