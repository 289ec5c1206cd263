// ABOUTME: Interactive session for the titanfit CLI and its command grammar
// ABOUTME: Each input line is parsed with clap and dispatched to a command module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod chat;
pub mod metric;
pub mod plan;
pub mod status;

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use titanfit::coach::LlmCoach;
use titanfit::config::AppConfig;
use titanfit::constants::plan::{DEFAULT_DAYS_PER_WEEK, DEFAULT_GOAL, DEFAULT_LEVEL};
use titanfit::context::AppContext;
use titanfit::views::AppView;
use tracing::debug;
use uuid::Uuid;

use crate::helpers::display::{display_help, display_view};
use crate::helpers::input::LineReader;

/// One line of input
#[derive(Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Switch to a view
    View {
        /// dashboard, workouts, metrics, or coach
        view: AppView,
    },

    /// Measurement commands
    Metric {
        #[command(subcommand)]
        action: MetricCommand,
    },

    /// Workout plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Send a message to the coach
    Chat {
        /// Message text
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Show coach configuration and check connectivity
    Status,

    /// List commands
    Help,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MetricCommand {
    /// Record a measurement
    Add {
        /// Weight in kilograms
        weight: f64,

        /// Body fat percentage
        #[arg(long)]
        fat: Option<f64>,

        /// Lean mass in kilograms
        #[arg(long)]
        muscle: Option<f64>,

        /// Measurement date (defaults to now)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a measurement
    #[command(alias = "delete")]
    Rm {
        /// Measurement ID as shown in the metrics view
        id: Uuid,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Generate a new plan in the background
    Generate {
        /// Training goal
        #[arg(long, default_value = DEFAULT_GOAL)]
        goal: String,

        /// Experience level
        #[arg(long, default_value = DEFAULT_LEVEL)]
        level: String,

        /// Training days per week
        #[arg(long, default_value_t = DEFAULT_DAYS_PER_WEEK)]
        days: u8,

        /// Injuries or limitations
        #[arg(long, default_value = "")]
        limitations: String,
    },
}

/// Interactive session state
pub struct Session {
    app: Arc<AppContext>,
    coach: LlmCoach,
    config: AppConfig,
    view: AppView,
}

impl Session {
    /// Create a session starting on the dashboard
    pub fn new(app: Arc<AppContext>, coach: LlmCoach, config: AppConfig) -> Self {
        Self {
            app,
            coach,
            config,
            view: AppView::Dashboard,
        }
    }

    /// Read commands from the terminal until `quit` or end of input
    pub async fn run(mut self) -> Result<()> {
        display_view(&self.app, self.view).await;
        if !self.config.coach_enabled() {
            println!("\nWARNING GEMINI_API_KEY não configurada: treinos e coach indisponíveis.");
        }
        display_help();

        let mut reader = LineReader::new()?;
        loop {
            println!();
            let Some(words) = reader.read_words(&format!("{}> ", self.view))? else {
                break;
            };
            if words.is_empty() {
                continue;
            }

            let parsed = match Line::try_parse_from(words) {
                Ok(parsed) => parsed,
                Err(e) => {
                    println!("{}", e.render());
                    continue;
                }
            };

            debug!("Dispatching command");
            if !self.dispatch(parsed.command).await {
                break;
            }
        }

        println!("Até logo!");
        Ok(())
    }

    /// Run one command; returns `false` when the session should end
    async fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::View { view } => {
                self.view = view;
                display_view(&self.app, view).await;
            }
            Command::Metric { action } => {
                match action {
                    MetricCommand::Add {
                        weight,
                        fat,
                        muscle,
                        date,
                    } => metric::add(&self.app, weight, fat, muscle, date).await,
                    MetricCommand::Rm { id } => metric::remove(&self.app, id).await,
                }
                self.refresh(&[AppView::Dashboard, AppView::Metrics]).await;
            }
            Command::Plan { action } => match action {
                PlanCommand::Generate {
                    goal,
                    level,
                    days,
                    limitations,
                } => plan::generate(&self.app, goal, level, days, limitations),
            },
            Command::Chat { words } => {
                chat::send(&self.app, &words.join(" ")).await;
            }
            Command::Status => status::show(&self.coach, &self.config).await,
            Command::Help => display_help(),
            Command::Quit => return false,
        }
        true
    }

    /// Redraw the active view if it shows state the last command changed
    async fn refresh(&self, affected: &[AppView]) {
        if affected.contains(&self.view) {
            display_view(&self.app, self.view).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &[&str]) -> Command {
        match Line::try_parse_from(line.iter().copied()) {
            Ok(parsed) => parsed.command,
            Err(e) => panic!("{line:?} should parse: {e}"),
        }
    }

    #[test]
    fn test_plan_generate_uses_form_defaults() {
        let Command::Plan {
            action:
                PlanCommand::Generate {
                    goal,
                    level,
                    days,
                    limitations,
                },
        } = parse(&["plan", "generate"])
        else {
            panic!("expected plan generate");
        };

        assert_eq!(goal, "Hipertrofia");
        assert_eq!(level, "Intermediário");
        assert_eq!(days, 4);
        assert!(limitations.is_empty());
    }

    #[test]
    fn test_plan_generate_overrides() {
        let Command::Plan {
            action: PlanCommand::Generate { goal, days, .. },
        } = parse(&["plan", "generate", "--goal", "Força", "--days", "5"])
        else {
            panic!("expected plan generate");
        };

        assert_eq!(goal, "Força");
        assert_eq!(days, 5);
    }

    #[test]
    fn test_chat_keeps_hyphenated_words() {
        let Command::Chat { words } = parse(&["chat", "dor", "-", "joelho"]) else {
            panic!("expected chat");
        };
        assert_eq!(words.join(" "), "dor - joelho");
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        assert!(Line::try_parse_from(["view", "settings"]).is_err());
    }

    #[test]
    fn test_exit_alias() {
        assert!(matches!(parse(&["exit"]), Command::Quit));
    }
}
