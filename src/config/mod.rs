// ABOUTME: Configuration management module for startup settings read from the environment
// ABOUTME: Exposes the model credential, model overrides, and deployment environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for `TitanFit`
//!
//! - **Environment**: `AppConfig` loaded once at process start
//! - **Types**: Strongly typed enums shared across config sections

/// Startup configuration from environment variables
pub mod environment;
/// Core configuration type definitions
pub mod types;

pub use environment::{AppConfig, LlmConfig};
pub use types::Environment;
