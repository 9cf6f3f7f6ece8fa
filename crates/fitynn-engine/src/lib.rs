// ABOUTME: Competition scoring engine for the Fitynn platform
// ABOUTME: Progress scores, trend and consistency analysis, ranking, and statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

#![deny(unsafe_code)]

//! # Fitynn Scoring Engine
//!
//! Pure, synchronous scoring engine for fitness competitions. Given each
//! participant's baseline and chronologically ordered measurement history,
//! it computes a composite progress score, classifies the short-term trend,
//! measures measurement-cadence consistency, ranks the field, and reduces
//! the ranked set into competition-wide statistics.
//!
//! The engine holds no state beyond its per-competition configuration and
//! performs no I/O; every operation is a pure function of its inputs and is
//! safe to invoke concurrently or to re-run as new measurements arrive.

/// Per-competition scoring engine and roster scoring
pub mod engine;

/// Measurement-cadence regularity metric
pub mod consistency;

/// Short-term trend classification over recent observations
pub mod trend;

/// Score-ordered ranking with explicit tie-breaks
pub mod ranking;

/// Competition-wide aggregate statistics
pub mod statistics;

pub use consistency::cadence_consistency;
pub use engine::ScoringEngine;
pub use ranking::rank_participants;
pub use statistics::competition_stats;
pub use trend::classify_trend;
