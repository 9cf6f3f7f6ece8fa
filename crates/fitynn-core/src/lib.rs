// ABOUTME: Core types and constants for the Fitynn competition scoring platform
// ABOUTME: Foundation crate with domain models, error handling, and scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

#![deny(unsafe_code)]

//! # Fitynn Core
//!
//! Foundation crate providing shared types and constants for the Fitynn
//! competition scoring platform. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Domain models (observations, participants, scores, stats)
//! - **constants**: Scoring weights and multipliers organized by concern

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain models shared between the scoring engine and its callers
pub mod models;

/// Scoring weights and multipliers organized by concern
pub mod constants;
