// ABOUTME: Core types and constants for the TitanFit fitness tracker
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `TitanFit` Core
//!
//! Foundation crate providing shared types and constants for the `TitanFit`
//! tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Body metrics, workout plans, and chat messages
//! - **constants**: User-facing strings and model defaults

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (metrics, plans, chat transcript)
pub mod models;

/// Application constants organized by domain
pub mod constants;
