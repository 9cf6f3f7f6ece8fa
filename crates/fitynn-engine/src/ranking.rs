// ABOUTME: Rank assignment for a fully scored competition field
// ABOUTME: Stable descending sort on score with an explicit consistency tie-break
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

use fitynn_core::models::ParticipantScore;

/// Rank a full competition's scored participants.
///
/// Sorts by `score` descending and assigns 1-based position ranks `1..=N`,
/// contiguous with no gaps or shared ranks: two participants tied on score
/// still receive consecutive ranks. Ties break on `consistency` descending,
/// then on input order (the sort is stable), so re-invoking on an unchanged
/// set yields identical rank assignments.
///
/// Zero-observation participants carry a zero score and therefore sort
/// below anyone with a positive score component.
#[must_use]
pub fn rank_participants(mut scored: Vec<ParticipantScore>) -> Vec<ParticipantScore> {
    scored.sort_by(|a, b| {
        b.progress
            .score
            .total_cmp(&a.progress.score)
            .then_with(|| b.progress.consistency.total_cmp(&a.progress.consistency))
    });

    for (index, participant) in scored.iter_mut().enumerate() {
        participant.rank = Some(u32::try_from(index + 1).unwrap_or(u32::MAX));
    }

    scored
}
