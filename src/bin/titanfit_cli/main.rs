// ABOUTME: TitanFit CLI - interactive terminal front end for the fitness tracker
// ABOUTME: Loads configuration, initializes logging, and runs the command loop over AppContext
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Start with an empty history
//! titanfit
//!
//! # Start with sample measurements
//! titanfit --demo
//!
//! # Debug logging as JSON on stderr
//! titanfit --verbose --log-format json
//! ```
//!
//! Inside the session:
//! ```text
//! view metrics
//! metric add 78.2 --fat 18.0 --muscle 39.0
//! plan generate --goal Hipertrofia --level Intermediário --days 4
//! chat "Como melhorar meu supino?"
//! ```

mod commands;
mod helpers;

use std::env;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use titanfit::coach::LlmCoach;
use titanfit::config::{AppConfig, Environment};
use titanfit::constants::env_vars;
use titanfit::context::AppContext;
use titanfit::logging::{LogFormat, LoggingConfig};
use tracing::info;

use commands::Session;
use helpers::demo::demo_metrics;

#[derive(Parser)]
#[command(
    name = "titanfit",
    about = "TitanFit - personal fitness tracker with an AI coach",
    long_about = "Track body measurements, generate workout plans, and chat with a virtual coach. \
                  Set GEMINI_API_KEY to enable plan generation and coaching."
)]
struct Cli {
    /// Seed the history with sample measurements
    #[arg(long)]
    demo: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Log output format (json, pretty, compact)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let environment = env::var(env_vars::ENVIRONMENT)
        .map(|s| Environment::from_str_or_default(&s))
        .unwrap_or_default();

    let mut logging = LoggingConfig::from_env(environment);
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Some(format) = cli.log_format.as_deref() {
        logging.format = LogFormat::from_str_or_default(format);
    }
    logging.init()?;

    let config = AppConfig::from_env()?;
    let coach = LlmCoach::from_config(&config);

    let mut app = AppContext::new(Arc::new(coach.clone()));
    if cli.demo {
        let seed = demo_metrics();
        info!(count = seed.len(), "Seeding sample measurements");
        app = app.with_metrics(seed);
    }

    Session::new(Arc::new(app), coach, config).run().await
}
