// ABOUTME: Main library entry point for the TitanFit fitness tracker
// ABOUTME: Wires the metric and plan stores, the Gemini-backed coach, and the text views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `TitanFit`
//!
//! A personal fitness tracker: record body measurements, generate workout
//! plans with a language model, and chat with a virtual coach that sees
//! the user's latest data.
//!
//! ## Architecture
//!
//! - **Store**: in-memory metric history, current plan, and chat transcript
//! - **Coach**: plan generation and advice over an [`llm::LlmProvider`]
//! - **Context**: [`context::AppContext`] owns all state and relays user intents
//! - **Views**: pure text renderers for the four screens
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use titanfit::config::AppConfig;
//! use titanfit::context::AppContext;
//! use titanfit::errors::AppResult;
//! use titanfit::models::BodyMetric;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let app = AppContext::from_config(&config);
//!
//!     app.add_metric(BodyMetric::now(78.5).with_body_fat(18.2)).await;
//!     println!("change: {} kg", app.weight_change().await);
//!     Ok(())
//! }
//! ```

/// Error types shared by every layer
pub use titanfit_core::errors;

/// Domain models for metrics, plans, and chat messages
pub use titanfit_core::models;

/// Model defaults, environment variable names, and user-facing messages
pub use titanfit_core::constants;

/// Plan generation and conversational advice
pub mod coach;

/// Startup configuration from environment variables
pub mod config;

/// Application context owning stores and in-flight flags
pub mod context;

/// LLM provider abstraction and the Gemini client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// In-memory stores
pub mod store;

/// Text renderers for the app screens
pub mod views;
