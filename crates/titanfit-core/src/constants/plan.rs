// ABOUTME: Default plan request values used when the user leaves a field blank
// ABOUTME: Mirrors the pre-filled choices of the workout generator form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Goal selected by default
pub const DEFAULT_GOAL: &str = "Hipertrofia";

/// Experience level selected by default
pub const DEFAULT_LEVEL: &str = "Intermediário";

/// Training days per week selected by default
pub const DEFAULT_DAYS_PER_WEEK: u8 = 4;
