// ABOUTME: Per-competition scoring engine composing percentage, consistency, and trend terms
// ABOUTME: Also provides whole-roster scoring into a ranked leaderboard with statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

use crate::consistency::cadence_consistency;
use crate::ranking::rank_participants;
use crate::statistics::competition_stats;
use crate::trend::classify_trend;
use fitynn_core::constants::scoring_weights::{
    BASE_POINTS_PER_PERCENT, CONSISTENCY_BONUS_POINTS, DECLINING_TREND_PENALTY,
    IMPROVING_TREND_BONUS,
};
use fitynn_core::models::{
    CompetitionKind, CompetitionStats, Leaderboard, MeasurementSubtype, Observation, Participant,
    ParticipantScore, ProgressScore, TrendDirection,
};
use rayon::prelude::*;
use tracing::debug;

/// Scoring engine configured once per competition.
///
/// Holds the two immutable fields that parameterize scoring: the competition
/// kind and, for body-measurement competitions, the measured subtype. They
/// affect exactly one step - the subtype bonus - and must not change across
/// calls for the same competition.
///
/// Every method is a pure function of its inputs; the engine keeps no cache
/// and no derived state, so it may be shared freely across threads and
/// re-invoked as new observations arrive.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    kind: CompetitionKind,
    subtype: Option<MeasurementSubtype>,
}

impl ScoringEngine {
    /// Create an engine for the given competition kind with no subtype
    #[must_use]
    pub const fn new(kind: CompetitionKind) -> Self {
        Self {
            kind,
            subtype: None,
        }
    }

    /// Set the measured subtype for a body-measurement competition.
    ///
    /// Ignored for weight-loss competitions. When left unset, measurement
    /// competitions fall back to the documented default
    /// ([`MeasurementSubtype::Chest`], neutral x1.00).
    #[must_use]
    pub const fn with_subtype(mut self, subtype: MeasurementSubtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    /// Competition kind this engine was configured with
    #[must_use]
    pub const fn kind(&self) -> CompetitionKind {
        self.kind
    }

    /// Compute the progress record for one participant.
    ///
    /// `observations` must be in chronological order; the engine trusts the
    /// caller and does not re-sort. An empty history is valid and yields the
    /// neutral record (score 0, stable trend, zero consistency) - such
    /// participants stay eligible for ranking but sort below anyone with a
    /// positive score.
    ///
    /// The score composes four terms:
    /// 1. base: `max(0, percentage_change * 10)` - only favorable
    ///    (reduction) percentage contributes, never negative;
    /// 2. consistency bonus: cadence consistency in `[0, 1]` times 5;
    /// 3. trend adjustment: +10 improving, -5 declining;
    /// 4. for measurement competitions, the subtype multiplier applied to
    ///    the entire accumulated score;
    /// and is clamped non-negative as the final step.
    ///
    /// A zero baseline has no meaningful percentage; it hardens to
    /// `percentage_change = 0` instead of propagating infinities.
    #[must_use]
    pub fn score_participant(
        &self,
        initial_value: f64,
        observations: &[Observation],
    ) -> ProgressScore {
        let Some(latest) = observations.last() else {
            return ProgressScore {
                initial_value,
                current_value: initial_value,
                absolute_change: 0.0,
                percentage_change: 0.0,
                score: 0.0,
                trend: TrendDirection::Stable,
                consistency: 0.0,
                observations: vec![],
            };
        };

        let current_value = latest.observed_value;
        let absolute_change = initial_value - current_value;
        let percentage_change = if initial_value == 0.0 {
            // No valid baseline: a percentage against zero is undefined.
            0.0
        } else {
            absolute_change / initial_value * 100.0
        };

        let mut score = (percentage_change * BASE_POINTS_PER_PERCENT).max(0.0);

        let consistency = cadence_consistency(observations);
        score = consistency.mul_add(CONSISTENCY_BONUS_POINTS, score);

        let trend = classify_trend(observations);
        score += match trend {
            TrendDirection::Improving => IMPROVING_TREND_BONUS,
            TrendDirection::Declining => -DECLINING_TREND_PENALTY,
            TrendDirection::Stable => 0.0,
        };

        if self.kind == CompetitionKind::Measurement {
            score *= self.subtype.unwrap_or_default().multiplier();
        }

        ProgressScore {
            initial_value,
            current_value,
            absolute_change,
            percentage_change,
            score: score.max(0.0),
            trend,
            consistency,
            observations: observations.to_vec(),
        }
    }

    /// Rank a fully scored competition field (see [`rank_participants`])
    #[must_use]
    pub fn rank_participants(&self, scored: Vec<ParticipantScore>) -> Vec<ParticipantScore> {
        rank_participants(scored)
    }

    /// Aggregate a ranked field into competition statistics
    /// (see [`competition_stats`])
    #[must_use]
    pub fn competition_stats(&self, ranked: &[ParticipantScore]) -> CompetitionStats {
        competition_stats(ranked)
    }

    /// Score an entire roster into a ranked leaderboard with statistics.
    ///
    /// Participants are scored independently - and in parallel, since
    /// scoring is pure - then ranked together and reduced into aggregate
    /// statistics. Roster order is preserved into the ranking tie-break.
    #[must_use]
    pub fn score_competition(&self, roster: &[Participant]) -> Leaderboard {
        let scored: Vec<ParticipantScore> = roster
            .par_iter()
            .map(|participant| ParticipantScore {
                user_id: participant.user_id,
                display_name: participant.display_name.clone(),
                avatar_url: participant.avatar_url.clone(),
                rank: None,
                progress: self.score_participant(
                    participant.initial_value,
                    &participant.observations,
                ),
            })
            .collect();

        let rankings = self.rank_participants(scored);
        let stats = self.competition_stats(&rankings);
        debug!(
            total = stats.total_participants,
            active = stats.active_participants,
            "scored competition roster"
        );

        Leaderboard { rankings, stats }
    }
}
