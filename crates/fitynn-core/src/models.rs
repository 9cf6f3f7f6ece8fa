// ABOUTME: Domain models for competitions, observations, and computed scores
// ABOUTME: Shared between the scoring engine and its callers (UI glue, CLI, tests)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

//! Domain models for the competition scoring engine.
//!
//! The caller supplies [`Participant`] rosters built from persisted
//! measurement rows; the engine produces [`ProgressScore`] records, joins
//! them with identity into [`ParticipantScore`], and reduces a ranked set
//! into [`CompetitionStats`].

use crate::constants::subtype_multipliers;
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One recorded measurement for a participant.
///
/// `baseline_value` is the participant's starting value for the competition,
/// duplicated onto every record by the caller. Immutable once created; the
/// engine never mutates or re-sorts observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Participant's starting value, constant across their observations
    pub baseline_value: f64,
    /// The measured value at `recorded_at`
    pub observed_value: f64,
    /// When the measurement was recorded
    pub recorded_at: DateTime<Utc>,
}

/// What a competition measures and rewards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionKind {
    /// Body-weight reduction competition
    WeightLoss,
    /// Single body-measurement reduction competition (see [`MeasurementSubtype`])
    Measurement,
}

/// Body site measured in a [`CompetitionKind::Measurement`] competition.
///
/// Closed set: each variant carries a fixed score multiplier. The default is
/// [`MeasurementSubtype::Chest`] (x1.00, neutral), applied only when a
/// competition genuinely has no subtype configured - unknown subtype strings
/// are rejected at parse time instead of silently falling back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementSubtype {
    /// Waist circumference
    Waist,
    /// Chest circumference (neutral multiplier)
    #[default]
    Chest,
    /// Arm circumference
    Arms,
    /// Leg circumference
    Legs,
    /// Hip circumference
    Hips,
}

impl MeasurementSubtype {
    /// Score multiplier for this measurement site.
    ///
    /// Applied to the entire accumulated score of a measurement competition,
    /// not just the percentage-based term.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Waist => subtype_multipliers::WAIST,
            Self::Chest => subtype_multipliers::CHEST,
            Self::Arms => subtype_multipliers::ARMS,
            Self::Legs => subtype_multipliers::LEGS,
            Self::Hips => subtype_multipliers::HIPS,
        }
    }

    /// Canonical lowercase name, matching the persisted `measurement_type` column
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waist => "waist",
            Self::Chest => "chest",
            Self::Arms => "arms",
            Self::Legs => "legs",
            Self::Hips => "hips",
        }
    }
}

impl fmt::Display for MeasurementSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementSubtype {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waist" => Ok(Self::Waist),
            "chest" => Ok(Self::Chest),
            "arms" => Ok(Self::Arms),
            "legs" => Ok(Self::Legs),
            "hips" => Ok(Self::Hips),
            other => Err(AppError::invalid_input(format!(
                "Unknown measurement subtype: {other}"
            ))),
        }
    }
}

/// Short-term direction of a participant's recent measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Recent values are decreasing (favorable in this domain)
    Improving,
    /// Recent values are increasing
    Declining,
    /// No clear direction, or not enough recent history to judge
    Stable,
}

/// Roster entry supplied by the caller for one competition participant.
///
/// Identity fields are opaque to the scoring math; the engine only threads
/// them through to the ranked output. `observations` must be in
/// chronological order - the engine trusts the caller and does not re-sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Stable participant identity
    pub user_id: Uuid,
    /// Display name for leaderboard rendering
    pub display_name: String,
    /// Optional avatar URL for leaderboard rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Starting value at competition start, fixed for the duration
    pub initial_value: f64,
    /// Chronologically ordered measurement history (may be empty)
    #[serde(default)]
    pub observations: Vec<Observation>,
}

/// Engine-computed progress record for one participant, identity-free.
///
/// Produced by `score_participant`; rank is not part of this record because
/// it only exists relative to a full competition set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressScore {
    /// Baseline value the percentages are computed against
    pub initial_value: f64,
    /// Observed value of the chronologically last observation
    pub current_value: f64,
    /// `initial_value - current_value`; a decrease from baseline is positive
    pub absolute_change: f64,
    /// Absolute change as a percentage of the baseline (0 when baseline is 0)
    pub percentage_change: f64,
    /// Composite score: percentage base + consistency bonus + trend
    /// adjustment, subtype multiplier for measurement competitions,
    /// clamped non-negative
    pub score: f64,
    /// Short-term direction over the most recent observations
    pub trend: TrendDirection,
    /// Measurement cadence regularity in `[0, 1]`
    pub consistency: f64,
    /// The observations the record was computed from
    pub observations: Vec<Observation>,
}

impl ProgressScore {
    /// Whether the participant has logged any measurements
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.observations.is_empty()
    }
}

/// A participant's progress joined with identity and competition rank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantScore {
    /// Stable participant identity
    pub user_id: Uuid,
    /// Display name for leaderboard rendering
    pub display_name: String,
    /// Optional avatar URL for leaderboard rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// 1-based position rank; `None` until the full competition set is
    /// ranked together
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// The computed progress record
    #[serde(flatten)]
    pub progress: ProgressScore,
}

/// Aggregate statistics over a fully ranked competition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitionStats {
    /// Total number of participants, active or not
    pub total_participants: usize,
    /// Mean of strictly positive percentage changes among active
    /// participants, 0 when there are none
    pub average_improvement: f64,
    /// Best strictly positive percentage change, 0 when there are none
    pub top_improvement: f64,
    /// Participants with at least one logged observation
    pub active_participants: usize,
    /// Mean cadence consistency across active participants, 0 when none
    pub consistency_rate: f64,
}

/// Combined ranked output for one competition, ready for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    /// All participants, sorted by rank ascending
    pub rankings: Vec<ParticipantScore>,
    /// Aggregate statistics over the ranked set
    pub stats: CompetitionStats,
}
