// ABOUTME: Prompt templates for the virtual coach and the workout plan generator
// ABOUTME: The coach persona is loaded at compile time; plan prompts embed the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! The coach system instruction lives in a markdown file next to this module
//! so the persona can be edited without touching code.

use crate::constants::messages::NO_LIMITATIONS;
use crate::models::PlanRequest;

/// `TitanCoach` persona, tone, and language instruction
pub const COACH_SYSTEM_PROMPT: &str = include_str!("coach_system.md");

/// Get the system instruction for coach advice
#[must_use]
pub const fn get_coach_system_prompt() -> &'static str {
    COACH_SYSTEM_PROMPT
}

/// Build the plan generation prompt embedding all four request parameters
#[must_use]
pub fn build_plan_prompt(request: &PlanRequest) -> String {
    let limitations = request.limitations.trim();
    let limitations = if limitations.is_empty() {
        NO_LIMITATIONS
    } else {
        limitations
    };

    format!(
        "Crie uma rotina de treino de musculação completa e estruturada.\n\
         Objetivo: {goal}.\n\
         Nível de experiência: {level}.\n\
         Frequência: {days} dias por semana.\n\
         Limitações/Lesões: {limitations}.\n\n\
         Retorne APENAS um objeto JSON válido seguindo a estrutura solicitada. \
         Certifique-se de que o treino seja balanceado e adequado ao nível solicitado.",
        goal = request.goal,
        level = request.level,
        days = request.days_per_week,
    )
}

/// Build the single user turn sent with an advice request
#[must_use]
pub fn build_advice_prompt(context_blob: &str, message: &str) -> String {
    format!("Contexto do Usuário: {context_blob}\n\nPergunta do Usuário: {message}")
}
