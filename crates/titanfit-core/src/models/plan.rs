// ABOUTME: Workout plan structures produced by the plan generation client
// ABOUTME: A plan owns its days and each day owns its ordered exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A structured multi-day workout routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Identifier assigned locally when the plan is accepted
    pub id: Uuid,
    /// Plan title
    pub name: String,
    /// Training goal the plan targets
    pub goal: String,
    /// Training days in order
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    /// Number of training days per week
    #[must_use]
    pub fn days_per_week(&self) -> usize {
        self.days.len()
    }

    /// Total number of exercises across all days
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|day| day.exercises.len()).sum()
    }
}

/// One training day of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Day label, e.g. "Treino A" or "Segunda-feira"
    pub day_name: String,
    /// Muscle group focus, e.g. "Peito e Tríceps"
    pub focus: String,
    /// Exercises in execution order
    pub exercises: Vec<Exercise>,
}

/// A single exercise prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    #[serde(deserialize_with = "deserialize_sets")]
    pub sets: u32,
    /// Rep scheme; free text because schemes like "8-12" are not numeric
    pub reps: String,
    /// Execution notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Parameters for generating a workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Training goal, e.g. "Hipertrofia"
    pub goal: String,
    /// Experience level, e.g. "Intermediário"
    pub level: String,
    /// Requested training days per week
    pub days_per_week: u8,
    /// Injuries or limitations; empty when none
    #[serde(default)]
    pub limitations: String,
}

impl PlanRequest {
    /// Create a request with no limitations
    #[must_use]
    pub fn new(goal: impl Into<String>, level: impl Into<String>, days_per_week: u8) -> Self {
        Self {
            goal: goal.into(),
            level: level.into(),
            days_per_week,
            limitations: String::new(),
        }
    }

    /// Set the limitations text
    #[must_use]
    pub fn with_limitations(mut self, limitations: impl Into<String>) -> Self {
        self.limitations = limitations.into();
        self
    }
}

/// The schema declares `sets` as a JSON number, so `4.0` must be accepted as 4
fn deserialize_sets<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!(
            "sets must be a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u32)
}
