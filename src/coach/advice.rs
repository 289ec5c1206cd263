// ABOUTME: Conversational coach advice through a single stateless model request
// ABOUTME: Always yields a reply bubble; placeholders record why no model text was used
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};

use super::LlmCoach;
use crate::constants::messages::{ADVICE_EMPTY, ADVICE_FAILED, ADVICE_UNAVAILABLE};
use crate::errors::ErrorCode;
use crate::llm::prompts::{build_advice_prompt, get_coach_system_prompt};
use crate::llm::{ChatRequest, LlmMessage};

/// Where the text of an advice reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSource {
    /// The model answered
    Model,
    /// No credential is configured
    Unavailable,
    /// The model answered with empty text
    Empty,
    /// The remote call failed
    Failed {
        /// Classification of the failure
        code: ErrorCode,
    },
}

/// Text to show in the chat plus its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceReply {
    /// Text rendered as the coach's message
    pub text: String,
    /// Where the text came from
    pub source: AdviceSource,
}

impl AdviceReply {
    /// Reply produced by the model
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AdviceSource::Model,
        }
    }

    /// Placeholder used when no credential is configured
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            text: ADVICE_UNAVAILABLE.to_owned(),
            source: AdviceSource::Unavailable,
        }
    }

    /// Placeholder used when the model produced no text
    #[must_use]
    pub fn empty() -> Self {
        Self {
            text: ADVICE_EMPTY.to_owned(),
            source: AdviceSource::Empty,
        }
    }

    /// Placeholder used when the remote call failed
    #[must_use]
    pub fn failed(code: ErrorCode) -> Self {
        Self {
            text: ADVICE_FAILED.to_owned(),
            source: AdviceSource::Failed { code },
        }
    }

    /// Whether the text is a real model answer
    #[must_use]
    pub const fn is_from_model(&self) -> bool {
        matches!(self.source, AdviceSource::Model)
    }
}

impl LlmCoach {
    /// Ask the coach a question
    ///
    /// Only `message` and `context_blob` are sent; earlier turns are not.
    #[instrument(skip_all, fields(message_len = message.len()))]
    pub async fn get_coach_advice(&self, message: &str, context_blob: &str) -> AdviceReply {
        let Some(provider) = self.provider.as_deref() else {
            warn!("Coach advice requested without an API key");
            return AdviceReply::unavailable();
        };

        let mut request = ChatRequest::new(vec![
            LlmMessage::system(get_coach_system_prompt()),
            LlmMessage::user(build_advice_prompt(context_blob, message)),
        ]);
        if let Some(model) = &self.model {
            request = request.with_model(model);
        }

        match provider.complete(&request).await {
            Ok(response) if response.content.trim().is_empty() => {
                warn!(finish_reason = ?response.finish_reason, "Coach reply was empty");
                AdviceReply::empty()
            }
            Ok(response) => AdviceReply::model(response.content),
            Err(e) => {
                error!(error = %e, code = ?e.code, "Coach advice request failed");
                AdviceReply::failed(e.code)
            }
        }
    }
}
