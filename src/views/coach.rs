// ABOUTME: Coach view rendering the chat transcript with local HH:MM timestamps
// ABOUTME: Shows a typing indicator while a chat request is in flight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use chrono::Local;

use crate::models::{ChatMessage, ChatRole};

/// Render the transcript
#[must_use]
pub fn render_coach(messages: &[ChatMessage], typing: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let author = match message.role {
            ChatRole::User => "Você",
            ChatRole::Model => "TitanCoach",
        };
        let _ = writeln!(
            out,
            "[{}] {author}: {}",
            message.timestamp.with_timezone(&Local).format("%H:%M"),
            message.text
        );
    }
    if typing {
        let _ = writeln!(out, "TitanCoach está digitando...");
    }
    out
}
