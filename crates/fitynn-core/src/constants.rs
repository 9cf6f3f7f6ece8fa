// ABOUTME: Scoring weights, windows, and subtype multipliers for competition scoring
// ABOUTME: Single source of truth for the numeric parameters of the score formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

//! Numeric parameters of the scoring formula, grouped by concern.
//!
//! Changing a value here changes every computed score, so the worked
//! examples in the engine tests pin these numbers down.

/// Weights applied when composing a participant's progress score
pub mod scoring_weights {
    /// Score points granted per percentage point of favorable change
    pub const BASE_POINTS_PER_PERCENT: f64 = 10.0;

    /// Maximum bonus for perfectly regular measurement cadence
    pub const CONSISTENCY_BONUS_POINTS: f64 = 5.0;

    /// Flat bonus when the recent trend is improving
    pub const IMPROVING_TREND_BONUS: f64 = 10.0;

    /// Flat penalty when the recent trend is declining
    pub const DECLINING_TREND_PENALTY: f64 = 5.0;
}

/// Windows and minimums for the trend and consistency analyses
pub mod analysis_windows {
    /// Number of most recent observations considered for trend classification
    pub const TREND_WINDOW: usize = 3;

    /// Minimum observations required before cadence consistency is measurable
    pub const MIN_CONSISTENCY_OBSERVATIONS: usize = 2;
}

/// Per-subtype score multipliers for body-measurement competitions.
///
/// The weights reflect domain difficulty and health relevance of reducing
/// each measurement site. The table is closed: every variant of
/// `MeasurementSubtype` maps to exactly one constant here.
pub mod subtype_multipliers {
    /// Waist reduction is highly valued
    pub const WAIST: f64 = 1.20;

    /// Important for health metrics
    pub const HIPS: f64 = 1.15;

    /// Good indicator of overall fitness
    pub const LEGS: f64 = 1.10;

    /// Standard scoring
    pub const CHEST: f64 = 1.00;

    /// Slightly lower as it's easier to reduce
    pub const ARMS: f64 = 0.90;
}
