//! Batch auto-play: many independent legs thrown by the built-in strategy.

use crate::accuracy::AccuracyProfile;
use crate::error::DartsResult;
use crate::game::Game;
use crate::scoring::ThrowVerdict;
use crate::strategy::suggest_target;
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Legs still open after this many darts are abandoned.
pub const MAX_DARTS_PER_GAME: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameRecord {
    pub game: usize,
    pub seed: u64,
    pub finished: bool,
    pub darts_thrown: u32,
    pub turns: u32,
    pub busts: u32,
    /// Zero for abandoned legs.
    pub stat_darts: u32,
    pub three_dart_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub games: usize,
    pub finished: usize,
    pub base_seed: u64,
    pub profile: AccuracyProfile,
    pub mean_darts: f64,
    pub min_darts: u32,
    pub max_darts: u32,
    pub mean_three_dart_average: f64,
    pub total_busts: u64,
}

pub struct SimulationReport {
    pub summary: SimulationSummary,
    pub records: Vec<GameRecord>,
}

/// Plays one leg to completion with a dedicated RNG.
pub fn play_auto_game(
    profile: AccuracyProfile,
    game: usize,
    seed: u64,
) -> DartsResult<GameRecord> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut leg = Game::new(profile);
    let mut busts = 0;

    while !leg.is_finished() && leg.state().darts_thrown < MAX_DARTS_PER_GAME {
        let target = suggest_target(leg.state().score);
        let report = leg.throw_at(target, &mut rng)?;
        if report.verdict == ThrowVerdict::Bust {
            busts += 1;
        }
    }

    let state = *leg.state();
    let stats = leg.statistics();
    if stats.is_none() {
        warn!(game, seed, darts = state.darts_thrown, "leg abandoned");
    }

    Ok(GameRecord {
        game,
        seed,
        finished: state.finished,
        darts_thrown: state.darts_thrown,
        turns: state.turn_number,
        busts,
        stat_darts: stats.map_or(0, |s| s.stat_darts),
        three_dart_average: stats.map_or(0.0, |s| s.three_dart_average),
    })
}

/// Runs `games` legs in parallel. Game `i` uses seed `base_seed + i`, so the
/// result does not depend on the thread count.
pub fn run(
    profile: AccuracyProfile,
    games: usize,
    seed: Option<u64>,
) -> DartsResult<SimulationReport> {
    let base_seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!(games, base_seed, "starting simulation");

    let records = (0..games)
        .into_par_iter()
        .map(|i| play_auto_game(profile, i, base_seed.wrapping_add(i as u64)))
        .collect::<DartsResult<Vec<_>>>()?;

    let summary = summarize(profile, base_seed, &records);
    info!(
        finished = summary.finished,
        mean_darts = summary.mean_darts,
        "simulation complete"
    );
    Ok(SimulationReport { summary, records })
}

pub fn summarize(
    profile: AccuracyProfile,
    base_seed: u64,
    records: &[GameRecord],
) -> SimulationSummary {
    let done: Vec<&GameRecord> = records.iter().filter(|r| r.finished).collect();

    SimulationSummary {
        games: records.len(),
        finished: done.len(),
        base_seed,
        profile,
        mean_darts: mean_of(&done, |r| r.stat_darts as f64),
        min_darts: done.iter().map(|r| r.stat_darts).min().unwrap_or(0),
        max_darts: done.iter().map(|r| r.stat_darts).max().unwrap_or(0),
        mean_three_dart_average: mean_of(&done, |r| r.three_dart_average),
        total_busts: records.iter().map(|r| r.busts as u64).sum(),
    }
}

fn mean_of(records: &[&GameRecord], f: impl Fn(&GameRecord) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|&r| f(r)).sum::<f64>() / records.len() as f64
}

pub fn write_csv<P: AsRef<Path>>(path: P, records: &[GameRecord]) -> DartsResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(out: W, summary: &SimulationSummary) -> DartsResult<()> {
    serde_json::to_writer_pretty(out, summary)?;
    Ok(())
}
