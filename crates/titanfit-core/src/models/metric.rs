// ABOUTME: Body-composition measurement record and derived weight-change indicator
// ABOUTME: BodyMetric is immutable once created; WeightChange is computed from two metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use uuid::Uuid;

/// A single timestamped body-composition measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetric {
    /// Unique measurement identifier
    pub id: Uuid,
    /// When the measurement was taken
    pub date: DateTime<Utc>,
    /// Body weight in kilograms
    pub weight: f64,
    /// Lean mass, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    /// Body fat percentage, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
}

impl BodyMetric {
    /// Create a measurement with a fresh identifier
    #[must_use]
    pub fn new(date: DateTime<Utc>, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            weight,
            muscle_mass: None,
            body_fat: None,
        }
    }

    /// Create a measurement taken right now
    #[must_use]
    pub fn now(weight: f64) -> Self {
        Self::new(Utc::now(), weight)
    }

    /// Attach a lean mass reading
    #[must_use]
    pub const fn with_muscle_mass(mut self, muscle_mass: f64) -> Self {
        self.muscle_mass = Some(muscle_mass);
        self
    }

    /// Attach a body fat percentage
    #[must_use]
    pub const fn with_body_fat(mut self, body_fat: f64) -> Self {
        self.body_fat = Some(body_fat);
        self
    }
}

/// Direction of the change between the two most recent measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Weight went up
    Up,
    /// Weight went down
    Down,
    /// No change, or not enough measurements to compare
    Flat,
}

/// Weight change since the previous measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightChange {
    /// Absolute difference in kilograms
    pub amount: f64,
    /// Sign of the difference
    pub direction: Trend,
}

impl WeightChange {
    /// Neutral indicator used when there is nothing to compare
    #[must_use]
    pub const fn flat() -> Self {
        Self {
            amount: 0.0,
            direction: Trend::Flat,
        }
    }

    /// Compute the change from `previous` to `current`
    #[must_use]
    pub fn between(current: f64, previous: f64) -> Self {
        let diff = current - previous;
        let direction = if diff > 0.0 {
            Trend::Up
        } else if diff < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        };
        Self {
            amount: diff.abs(),
            direction,
        }
    }
}

impl Default for WeightChange {
    fn default() -> Self {
        Self::flat()
    }
}

impl Display for WeightChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.amount)
    }
}
