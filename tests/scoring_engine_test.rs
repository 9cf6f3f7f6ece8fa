// ABOUTME: Integration tests for the scoring engine through the public facade
// ABOUTME: Covers worked scoring examples, ranking properties, and aggregate statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use fitynn_scoring::models::{
    CompetitionKind, MeasurementSubtype, Observation, Participant, TrendDirection,
};
use fitynn_scoring::ScoringEngine;
use uuid::Uuid;

/// Build a participant with evenly spaced daily observations
fn participant(name: &str, initial_value: f64, currents: &[f64]) -> Participant {
    let start = Utc.with_ymd_and_hms(2025, 4, 1, 6, 0, 0).unwrap();
    Participant {
        user_id: Uuid::new_v4(),
        display_name: name.to_owned(),
        avatar_url: None,
        initial_value,
        observations: currents
            .iter()
            .enumerate()
            .map(|(i, value)| Observation {
                baseline_value: initial_value,
                observed_value: *value,
                recorded_at: start + Duration::days(i as i64),
            })
            .collect(),
    }
}

// === Score composition ===

#[test]
fn test_weight_loss_worked_example_scores_115() {
    let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
    let p = participant("runner", 100.0, &[98.0, 94.0, 90.0]);
    let progress = engine.score_participant(p.initial_value, &p.observations);

    assert!((progress.absolute_change - 10.0).abs() < 1e-9);
    assert!((progress.percentage_change - 10.0).abs() < 1e-9);
    assert_eq!(progress.trend, TrendDirection::Improving);
    assert!((progress.consistency - 1.0).abs() < 1e-9);
    assert!((progress.score - 115.0).abs() < 1e-9);
}

#[test]
fn test_waist_competition_scales_to_138() {
    let engine =
        ScoringEngine::new(CompetitionKind::Measurement).with_subtype(MeasurementSubtype::Waist);
    let p = participant("lifter", 100.0, &[98.0, 94.0, 90.0]);
    let progress = engine.score_participant(p.initial_value, &p.observations);
    assert!((progress.score - 138.0).abs() < 1e-9);
}

#[test]
fn test_score_is_never_negative() {
    let engine = ScoringEngine::new(CompetitionKind::Measurement).with_subtype(MeasurementSubtype::Arms);
    let cases = [
        participant("gainer", 100.0, &[102.0, 105.0, 109.0]),
        participant("flat", 100.0, &[100.0, 100.0, 100.0]),
        participant("no data", 100.0, &[]),
        participant("zero baseline", 0.0, &[5.0, 9.0]),
    ];
    for case in &cases {
        let progress = engine.score_participant(case.initial_value, &case.observations);
        assert!(
            progress.score >= 0.0,
            "score went negative for {}",
            case.display_name
        );
        assert!(progress.score.is_finite());
    }
}

#[test]
fn test_empty_history_yields_neutral_record() {
    let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
    let progress = engine.score_participant(75.0, &[]);

    assert!((progress.current_value - 75.0).abs() < f64::EPSILON);
    assert!((progress.score - 0.0).abs() < f64::EPSILON);
    assert_eq!(progress.trend, TrendDirection::Stable);
    assert!((progress.consistency - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_short_history_trend_is_stable() {
    let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
    for currents in [&[99.0][..], &[99.0, 97.0][..]] {
        let p = participant("early days", 100.0, currents);
        let progress = engine.score_participant(p.initial_value, &p.observations);
        assert_eq!(progress.trend, TrendDirection::Stable);
    }
}

// === Ranking ===

#[test]
fn test_ranks_are_contiguous_one_based() {
    let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
    let roster = vec![
        participant("a", 100.0, &[99.0]),
        participant("b", 100.0, &[92.0, 91.0, 90.0]),
        participant("c", 100.0, &[]),
        participant("d", 100.0, &[96.0, 95.0]),
    ];
    let leaderboard = engine.score_competition(&roster);

    let ranks: Vec<u32> = leaderboard
        .rankings
        .iter()
        .map(|p| p.rank.unwrap())
        .collect();
    assert_eq!(ranks, [1, 2, 3, 4]);

    // Sorted descending by score
    let scores: Vec<f64> = leaderboard
        .rankings
        .iter()
        .map(|p| p.progress.score)
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn test_tied_scores_keep_roster_order() {
    let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
    // Identical trajectories tie on both score and consistency.
    let roster = vec![
        participant("first entrant", 100.0, &[98.0, 94.0, 90.0]),
        participant("second entrant", 100.0, &[98.0, 94.0, 90.0]),
        participant("third entrant", 100.0, &[99.0]),
    ];
    let leaderboard = engine.score_competition(&roster);

    let names: Vec<&str> = leaderboard
        .rankings
        .iter()
        .map(|p| p.display_name.as_str())
        .collect();
    assert_eq!(names, ["first entrant", "second entrant", "third entrant"]);
    let ranks: Vec<u32> = leaderboard
        .rankings
        .iter()
        .map(|p| p.rank.unwrap())
        .collect();
    assert_eq!(ranks, [1, 2, 3]);
}

#[test]
fn test_ranking_is_stable_across_reinvocation() {
    let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
    let roster = vec![
        participant("x", 100.0, &[95.0, 94.0, 93.0]),
        participant("y", 90.0, &[85.5, 84.6, 83.7]),
        participant("z", 80.0, &[]),
    ];

    let first = engine.score_competition(&roster);
    let second = engine.score_competition(&roster);

    let ranks_a: Vec<(Uuid, Option<u32>)> = first
        .rankings
        .iter()
        .map(|p| (p.user_id, p.rank))
        .collect();
    let ranks_b: Vec<(Uuid, Option<u32>)> = second
        .rankings
        .iter()
        .map(|p| (p.user_id, p.rank))
        .collect();
    assert_eq!(ranks_a, ranks_b);
}

// === Statistics ===

#[test]
fn test_stats_over_mixed_field() {
    let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
    let roster = vec![
        participant("loser", 100.0, &[95.0, 92.5, 90.0]), // +10%
        participant("gainer", 100.0, &[103.0, 104.0, 105.0]), // -5%, excluded
        participant("ghost", 100.0, &[]),                 // inactive
    ];
    let leaderboard = engine.score_competition(&roster);
    let stats = &leaderboard.stats;

    assert_eq!(stats.total_participants, 3);
    assert_eq!(stats.active_participants, 2);
    assert!((stats.average_improvement - 10.0).abs() < 1e-9);
    assert!((stats.top_improvement - 10.0).abs() < 1e-9);
    assert!(stats.consistency_rate > 0.0);
    assert!(stats.consistency_rate <= 1.0);
}

#[test]
fn test_empty_competition_stats_all_zero() {
    let engine = ScoringEngine::new(CompetitionKind::Measurement);
    let leaderboard = engine.score_competition(&[]);

    assert_eq!(leaderboard.stats.total_participants, 0);
    assert_eq!(leaderboard.stats.active_participants, 0);
    assert!((leaderboard.stats.average_improvement - 0.0).abs() < f64::EPSILON);
    assert!((leaderboard.stats.top_improvement - 0.0).abs() < f64::EPSILON);
    assert!((leaderboard.stats.consistency_rate - 0.0).abs() < f64::EPSILON);
}

// === Hardened edge cases ===

#[test]
fn test_duplicate_timestamps_zero_consistency() {
    let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
    let when = Utc.with_ymd_and_hms(2025, 4, 2, 12, 0, 0).unwrap();
    let observations = vec![
        Observation {
            baseline_value: 100.0,
            observed_value: 98.0,
            recorded_at: when,
        },
        Observation {
            baseline_value: 100.0,
            observed_value: 97.0,
            recorded_at: when,
        },
    ];
    let progress = engine.score_participant(100.0, &observations);

    assert!((progress.consistency - 0.0).abs() < f64::EPSILON);
    assert!(progress.score.is_finite());
}

#[test]
fn test_zero_baseline_excluded_from_improvement_stats() {
    let engine = ScoringEngine::new(CompetitionKind::WeightLoss);
    let roster = vec![
        participant("valid", 100.0, &[92.0]),  // +8%
        participant("no baseline", 0.0, &[5.0]), // hardened to 0%
    ];
    let leaderboard = engine.score_competition(&roster);

    assert!((leaderboard.stats.average_improvement - 8.0).abs() < 1e-9);
    assert!((leaderboard.stats.top_improvement - 8.0).abs() < 1e-9);
}
