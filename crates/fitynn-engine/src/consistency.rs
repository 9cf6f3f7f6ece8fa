// ABOUTME: Measurement-cadence consistency metric over inter-observation time gaps
// ABOUTME: Population standard deviation over mean gap, clamped into the unit interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn
#![allow(clippy::cast_precision_loss)] // Safe: gap counts and millisecond spans fit f64

use fitynn_core::constants::analysis_windows::MIN_CONSISTENCY_OBSERVATIONS;
use fitynn_core::models::Observation;

/// Quantify how regular a participant's measurement cadence is.
///
/// Returns a value in `[0, 1]`: perfectly even spacing between observations
/// yields 1, highly irregular spacing approaches 0, and fewer than two
/// observations yield 0 because no interval exists to measure.
///
/// Computed as `1 - stddev(gaps) / mean(gaps)` over the millisecond gaps
/// between consecutive `recorded_at` timestamps, using the population
/// standard deviation, clamped into `[0, 1]`.
///
/// Timestamps must be strictly increasing: any non-positive gap (duplicate
/// or out-of-order timestamps) yields 0 rather than dividing by a zero or
/// negative mean gap.
#[must_use]
pub fn cadence_consistency(observations: &[Observation]) -> f64 {
    if observations.len() < MIN_CONSISTENCY_OBSERVATIONS {
        return 0.0;
    }

    let gaps: Vec<f64> = observations
        .windows(2)
        .map(|pair| (pair[1].recorded_at - pair[0].recorded_at).num_milliseconds() as f64)
        .collect();

    if gaps.iter().any(|gap| *gap <= 0.0) {
        return 0.0;
    }

    let mean_gap = gaps.iter().sum::<f64>() / gaps.len() as f64;
    let variance = gaps
        .iter()
        .map(|gap| {
            let deviation = gap - mean_gap;
            deviation * deviation
        })
        .sum::<f64>()
        / gaps.len() as f64;
    let std_dev_gap = variance.sqrt();

    (1.0 - std_dev_gap / mean_gap).clamp(0.0, 1.0)
}
