// ABOUTME: Append-only transcript of the conversation with the virtual coach
// ABOUTME: Starts with the coach's welcome message; messages are never edited or removed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages::COACH_WELCOME;
use crate::models::ChatMessage;

/// Ordered coach conversation
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// Create a transcript seeded with the welcome message
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(COACH_WELCOME)],
        }
    }

    /// Append a message
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// All messages in order
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Most recent message
    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript has no messages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}
