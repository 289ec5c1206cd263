// ABOUTME: Text view layer for the four app screens and navigation between them
// ABOUTME: Renderers are pure functions of state snapshots so they can be tested directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Views
//!
//! Each view renders a snapshot taken from `AppContext` into plain text.
//! The terminal front end owns the current [`AppView`] and relays user
//! intents back into the context.

mod chart;
mod coach;
mod dashboard;
mod metrics;
mod workouts;

pub use chart::{render_weight_chart, sparkline};
pub use coach::render_coach;
pub use dashboard::{change_line, render_dashboard, trend_arrow};
pub use metrics::render_metrics;
pub use workouts::render_workouts;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::errors::AppError;

/// Screens reachable from the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppView {
    /// Overview with KPIs and the weight chart
    #[default]
    Dashboard,
    /// Plan generator and current plan
    Workouts,
    /// Measurement history and entry
    Metrics,
    /// Chat with the virtual coach
    Coach,
}

impl AppView {
    /// Navigation order
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Workouts, Self::Metrics, Self::Coach];

    /// Menu label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Workouts => "Meus Treinos",
            Self::Metrics => "Medidas & Peso",
            Self::Coach => "AI Coach",
        }
    }

    /// Heading shown above the view
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Visão Geral",
            Self::Workouts => "Meus Treinos",
            Self::Metrics => "Acompanhamento Corporal",
            Self::Coach => "Seu Treinador Virtual",
        }
    }

    /// Short command name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Workouts => "workouts",
            Self::Metrics => "metrics",
            Self::Coach => "coach",
        }
    }
}

impl Display for AppView {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppView {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" | "home" | "1" => Ok(Self::Dashboard),
            "workouts" | "treinos" | "plan" | "2" => Ok(Self::Workouts),
            "metrics" | "medidas" | "3" => Ok(Self::Metrics),
            "coach" | "chat" | "4" => Ok(Self::Coach),
            other => Err(AppError::invalid_input(format!("unknown view '{other}'"))),
        }
    }
}

/// Render the navigation menu, marking the active view
#[must_use]
pub fn render_navigation(current: AppView) -> String {
    AppView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let marker = if *view == current { '>' } else { ' ' };
            format!("{marker} {}. {}", i + 1, view.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
