// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the coach, model defaults, and user-facing copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Remote model defaults (endpoint, model, sampling)
pub mod llm;
/// User-facing messages shown by the coach and the views (pt-BR)
pub mod messages;
/// Environment variable names read at startup
pub mod env_vars;
/// Pre-filled plan request values
pub mod plan;
