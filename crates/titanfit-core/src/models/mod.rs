// ABOUTME: Domain models for body metrics, workout plans, and coach conversations
// ABOUTME: Value-like records shared between stores, coach clients, and views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod chat;
mod metric;
mod plan;

pub use chat::{ChatMessage, ChatRole};
pub use metric::{BodyMetric, Trend, WeightChange};
pub use plan::{Exercise, PlanRequest, WorkoutDay, WorkoutPlan};
