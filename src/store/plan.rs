// ABOUTME: Holder for the single current workout plan
// ABOUTME: A newly generated plan replaces the previous one wholesale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::WorkoutPlan;

/// At most one current plan
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    current: Option<WorkoutPlan>,
}

impl PlanStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// The current plan, if any
    #[must_use]
    pub const fn current(&self) -> Option<&WorkoutPlan> {
        self.current.as_ref()
    }

    /// Replace the current plan, returning the one it displaced
    pub fn replace(&mut self, plan: WorkoutPlan) -> Option<WorkoutPlan> {
        self.current.replace(plan)
    }
}
