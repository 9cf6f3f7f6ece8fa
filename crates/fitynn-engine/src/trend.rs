// ABOUTME: Short-term trend classification over a participant's recent observations
// ABOUTME: Majority vote over consecutive differences in the last three measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

use fitynn_core::constants::analysis_windows::TREND_WINDOW;
use fitynn_core::models::{Observation, TrendDirection};
use std::cmp::Ordering;

/// Classify the short-term direction of a participant's measurements.
///
/// Looks only at the last [`TREND_WINDOW`] observations (chronological order
/// is caller-guaranteed) and takes a majority vote over their consecutive
/// differences: a strictly decreasing step counts as improving - this domain
/// rewards reduction - and a strictly increasing step as declining. A tie,
/// including all-zero differences, is [`TrendDirection::Stable`].
///
/// With fewer than [`TREND_WINDOW`] observations there is not enough recent
/// history to judge, so the result is unconditionally stable.
#[must_use]
pub fn classify_trend(observations: &[Observation]) -> TrendDirection {
    if observations.len() < TREND_WINDOW {
        return TrendDirection::Stable;
    }

    let recent = &observations[observations.len() - TREND_WINDOW..];
    let mut improving_count = 0_u32;
    let mut declining_count = 0_u32;

    for pair in recent.windows(2) {
        if pair[1].observed_value < pair[0].observed_value {
            improving_count += 1;
        } else if pair[1].observed_value > pair[0].observed_value {
            declining_count += 1;
        }
    }

    match improving_count.cmp(&declining_count) {
        Ordering::Greater => TrendDirection::Improving,
        Ordering::Less => TrendDirection::Declining,
        Ordering::Equal => TrendDirection::Stable,
    }
}
