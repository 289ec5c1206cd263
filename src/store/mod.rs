// ABOUTME: In-memory stores for measurements, the current plan, and the coach transcript
// ABOUTME: Pure local mutation; all state is volatile and lost on process exit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod metrics;
mod plan;
mod transcript;

pub use metrics::MetricStore;
pub use plan::PlanStore;
pub use transcript::ChatTranscript;
