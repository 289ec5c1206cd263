// ABOUTME: Chat command for the titanfit CLI
// ABOUTME: Sends one message to the coach and prints the reply bubble
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use titanfit::coach::AdviceSource;
use titanfit::context::AppContext;
use tracing::debug;

use crate::helpers::display::display_chat_turn;

/// Send `text` to the coach
pub async fn send(app: &AppContext, text: &str) {
    println!("TitanCoach está digitando...");
    match app.send_chat_message(text).await {
        Ok(turn) => {
            if turn.source != AdviceSource::Model {
                debug!(source = ?turn.source, "Coach reply is a placeholder");
            }
            display_chat_turn(&turn);
        }
        Err(e) => println!("Error {}", e.message),
    }
}
