// ABOUTME: Leaderboard CLI for scoring a competition snapshot from JSON
// ABOUTME: Loads roster and observations, runs the scoring engine, prints rankings and stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitynn

//! Leaderboard CLI for the Fitynn scoring engine.
//!
//! Reads a competition snapshot (kind, optional measurement subtype, and the
//! participant roster with chronologically ordered observations) from a JSON
//! file, scores and ranks the field, and prints the leaderboard plus the
//! competition statistics.
//!
//! Usage:
//! ```bash
//! # Human-readable leaderboard
//! cargo run --bin fitynn-leaderboard -- --input competition.json
//!
//! # Machine-readable output for downstream tooling
//! cargo run --bin fitynn-leaderboard -- --input competition.json --json
//!
//! # Verbose logging
//! cargo run --bin fitynn-leaderboard -- --input competition.json -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use fitynn_scoring::logging::LoggingConfig;
use fitynn_scoring::models::{
    CompetitionKind, Leaderboard, MeasurementSubtype, Participant, TrendDirection,
};
use fitynn_scoring::ScoringEngine;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitynn-leaderboard",
    about = "Fitynn competition leaderboard",
    long_about = "Score and rank a competition snapshot exported as JSON"
)]
struct LeaderboardArgs {
    /// Path to the competition snapshot JSON file
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Emit the full leaderboard as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Competition snapshot as exported by the surrounding application.
///
/// The subtype arrives as the raw persisted string and is validated here at
/// the boundary; unknown values are rejected instead of silently defaulting.
#[derive(Debug, Deserialize)]
struct CompetitionSnapshot {
    /// What the competition measures and rewards
    competition_kind: CompetitionKind,
    /// Measured body site for measurement competitions, if configured
    #[serde(default)]
    measurement_subtype: Option<String>,
    /// Participant roster with observation histories
    #[serde(default)]
    participants: Vec<Participant>,
}

fn build_engine(snapshot: &CompetitionSnapshot) -> Result<ScoringEngine> {
    let mut engine = ScoringEngine::new(snapshot.competition_kind);
    if let Some(raw) = snapshot.measurement_subtype.as_deref() {
        let subtype: MeasurementSubtype = raw.parse()?;
        engine = engine.with_subtype(subtype);
    }
    Ok(engine)
}

const fn trend_label(trend: TrendDirection) -> &'static str {
    match trend {
        TrendDirection::Improving => "improving",
        TrendDirection::Declining => "declining",
        TrendDirection::Stable => "stable",
    }
}

fn print_table(leaderboard: &Leaderboard) {
    println!(
        "{:>4}  {:<24} {:>8} {:>8}  {:<9} {:>11} {:>8}",
        "RANK", "NAME", "CHANGE", "%CHANGE", "TREND", "CONSISTENCY", "SCORE"
    );
    for entry in &leaderboard.rankings {
        println!(
            "{:>4}  {:<24} {:>8.1} {:>7.1}%  {:<9} {:>11.2} {:>8.1}",
            entry.rank.unwrap_or(0),
            entry.display_name,
            entry.progress.absolute_change,
            entry.progress.percentage_change,
            trend_label(entry.progress.trend),
            entry.progress.consistency,
            entry.progress.score,
        );
    }

    let stats = &leaderboard.stats;
    println!();
    println!(
        "Participants: {} ({} active)",
        stats.total_participants, stats.active_participants
    );
    println!(
        "Average improvement: {:.1}%  Top improvement: {:.1}%  Consistency rate: {:.2}",
        stats.average_improvement, stats.top_improvement, stats.consistency_rate
    );
}

fn main() -> Result<()> {
    let args = LeaderboardArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read snapshot file: {}", args.input.display()))?;
    let snapshot: CompetitionSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid competition snapshot: {}", args.input.display()))?;

    info!(
        kind = ?snapshot.competition_kind,
        participants = snapshot.participants.len(),
        "loaded competition snapshot"
    );

    let engine = build_engine(&snapshot)?;
    let roster: Vec<Participant> = snapshot.participants;
    let leaderboard = engine.score_competition(&roster);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&leaderboard)?);
    } else {
        print_table(&leaderboard);
    }

    Ok(())
}
