// ABOUTME: Facade crate re-exporting the Fitynn scoring engine and core types
// ABOUTME: Adds structured-logging setup shared by the leaderboard CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

#![deny(unsafe_code)]

//! # Fitynn Scoring
//!
//! Competition scoring and ranking for fitness competitions. Given each
//! participant's baseline and chronologically ordered measurements, the
//! engine computes a composite progress score, classifies the short-term
//! trend, measures cadence consistency, ranks the field, and aggregates
//! competition statistics.
//!
//! This crate re-exports the `fitynn-core` and `fitynn-engine` workspace
//! crates under one roof and adds the ambient pieces the `fitynn-leaderboard`
//! binary needs: structured logging configuration on `tracing`.
//!
//! ```
//! use fitynn_scoring::models::{CompetitionKind, Participant};
//! use fitynn_scoring::ScoringEngine;
//!
//! let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
//! let leaderboard = engine.score_competition(&[] as &[Participant]);
//! assert_eq!(leaderboard.stats.total_participants, 0);
//! ```

// Re-export the foundation crate modules under the familiar paths
pub use fitynn_core::{constants, errors, models};

// Re-export the engine operations
pub use fitynn_engine::{
    cadence_consistency, classify_trend, competition_stats, rank_participants, ScoringEngine,
};

/// Structured logging configuration and setup
pub mod logging;
