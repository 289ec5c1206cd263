// ABOUTME: Re-exports helper modules for the titanfit CLI
// ABOUTME: Provides sample data, terminal line input, and view display utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod demo;
pub mod display;
pub mod input;
