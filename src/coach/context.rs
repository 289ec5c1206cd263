// ABOUTME: Serialized snapshot of the user's plan and latest measurement sent with chat messages
// ABOUTME: Gives the stateless advice request situational grounding without chat history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::constants::messages::{CONTEXT_NO_GOAL, CONTEXT_NO_STATS, CONTEXT_NO_WORKOUT};
use crate::models::{BodyMetric, WorkoutPlan};

/// Latest measurement as seen by the coach
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LatestStats {
    /// Most recent measurement values
    Measured {
        /// Weight in kilograms
        weight: f64,
        /// Body fat percentage
        #[serde(skip_serializing_if = "Option::is_none")]
        fat: Option<f64>,
        /// Lean mass
        #[serde(skip_serializing_if = "Option::is_none")]
        muscle: Option<f64>,
    },
    /// Placeholder text when nothing has been measured
    Missing(&'static str),
}

/// Context blob attached to every advice request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachContext {
    /// Current plan name or placeholder
    pub current_workout: String,
    /// Latest measurement or placeholder
    pub latest_stats: LatestStats,
    /// Current plan goal or placeholder
    pub goals: String,
}

impl CoachContext {
    /// Capture the current plan and most recent measurement
    #[must_use]
    pub fn snapshot(latest: Option<&BodyMetric>, plan: Option<&WorkoutPlan>) -> Self {
        let latest_stats = latest.map_or(LatestStats::Missing(CONTEXT_NO_STATS), |metric| {
            LatestStats::Measured {
                weight: metric.weight,
                fat: metric.body_fat,
                muscle: metric.muscle_mass,
            }
        });

        Self {
            current_workout: plan.map_or_else(|| CONTEXT_NO_WORKOUT.to_owned(), |p| p.name.clone()),
            latest_stats,
            goals: plan.map_or_else(|| CONTEXT_NO_GOAL.to_owned(), |p| p.goal.clone()),
        }
    }

    /// Serialize to the JSON text embedded in the prompt
    #[must_use]
    pub fn to_blob(&self) -> String {
        // Plain strings and floats; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
