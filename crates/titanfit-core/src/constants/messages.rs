// ABOUTME: User-facing copy for the coach conversation and plan generation outcomes
// ABOUTME: All strings are Brazilian Portuguese to match the coach persona
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// First message of every transcript
pub const COACH_WELCOME: &str = "Olá! Sou o TitanCoach. Posso analisar seus dados de treino e peso, ou tirar dúvidas sobre dieta e execução de exercícios. Como posso ajudar hoje?";

/// Reply shown when no credential is configured
pub const ADVICE_UNAVAILABLE: &str = "Erro de configuração: Chave de API não encontrada. Por favor, configure a variável de ambiente GEMINI_API_KEY.";

/// Reply shown when the model answered with empty text
pub const ADVICE_EMPTY: &str = "Desculpe, não consegui processar sua resposta agora.";

/// Reply shown when the remote call failed
pub const ADVICE_FAILED: &str = "Ocorreu um erro ao conectar com seu treinador virtual.";

/// Shown when plan generation produced no plan
pub const PLAN_UNAVAILABLE: &str = "Não foi possível gerar o treino. Tente novamente.";

/// Shown when plan generation failed
pub const PLAN_FAILED: &str = "Erro ao conectar com a IA. Verifique sua chave de API.";

/// Context placeholder when there is no current plan
pub const CONTEXT_NO_WORKOUT: &str = "Sem treino definido";

/// Context placeholder when there are no measurements
pub const CONTEXT_NO_STATS: &str = "Sem dados de medição";

/// Context placeholder when there is no goal
pub const CONTEXT_NO_GOAL: &str = "Não especificado";

/// Prompt placeholder for empty limitations
pub const NO_LIMITATIONS: &str = "Nenhuma";
