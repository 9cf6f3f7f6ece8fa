// ABOUTME: Competition-wide aggregate statistics over a fully ranked field
// ABOUTME: Active participation, improvement averages, and consistency rate reductions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn
#![allow(clippy::cast_precision_loss)] // Safe: participant counts fit f64

use fitynn_core::models::{CompetitionStats, ParticipantScore};

/// Reduce a fully ranked competition into aggregate statistics.
///
/// A participant is *active* when they have logged at least one observation.
/// Improvement statistics consider only the strictly positive
/// `percentage_change` values of active participants - zero or unfavorable
/// changes are excluded from the aggregates, not zeroed. The consistency
/// rate averages over active participants only. An empty field reduces to
/// the all-zero [`CompetitionStats`].
#[must_use]
pub fn competition_stats(participants: &[ParticipantScore]) -> CompetitionStats {
    if participants.is_empty() {
        return CompetitionStats::default();
    }

    let active: Vec<&ParticipantScore> = participants
        .iter()
        .filter(|p| p.progress.is_active())
        .collect();

    let improvements: Vec<f64> = active
        .iter()
        .map(|p| p.progress.percentage_change)
        .filter(|change| *change > 0.0)
        .collect();

    let average_improvement = if improvements.is_empty() {
        0.0
    } else {
        improvements.iter().sum::<f64>() / improvements.len() as f64
    };
    let top_improvement = improvements.iter().copied().fold(0.0_f64, f64::max);

    let consistency_rate = if active.is_empty() {
        0.0
    } else {
        active.iter().map(|p| p.progress.consistency).sum::<f64>() / active.len() as f64
    };

    CompetitionStats {
        total_participants: participants.len(),
        average_improvement,
        top_improvement,
        active_participants: active.len(),
        consistency_rate,
    }
}
