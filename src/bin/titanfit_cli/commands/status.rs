// ABOUTME: Status command for the titanfit CLI
// ABOUTME: Reports coach configuration and checks that the model endpoint answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use titanfit::coach::LlmCoach;
use titanfit::config::AppConfig;

/// Print coach configuration and connectivity
pub async fn show(coach: &LlmCoach, config: &AppConfig) {
    println!("Ambiente: {}", config.environment);
    println!("Modelo: {}", config.llm.model);
    println!("Endpoint: {}", config.llm.base_url);

    let Some(provider) = coach.provider() else {
        println!("Coach: desativado (sem chave de API)");
        return;
    };

    println!("Coach: {}", provider.display_name());
    match provider.health_check().await {
        Ok(true) => println!("Conexão: OK"),
        Ok(false) => println!("Conexão: endpoint respondeu com erro"),
        Err(e) => println!("Conexão: falhou ({e})"),
    }
}
