//! End-of-game averages.
//!
//! Busted turns count as full three-dart turns, so the dart total is derived
//! from the turn counter rather than from `darts_thrown`.

use crate::scoring::{GameState, DARTS_PER_TURN, STARTING_SCORE};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameStats {
    /// `((darts_thrown - 1) % 3) + 1`, in 1..=3. A short bust turn earlier in the
    /// leg shifts this away from the physical count of the last turn.
    pub finishing_turn_darts: u32,
    pub stat_darts: u32,
    pub average_per_dart: f64,
    pub three_dart_average: f64,
    pub total_turns: f64,
}

impl GameStats {
    /// `None` until the game has been checked out.
    pub fn from_state(state: &GameState) -> Option<Self> {
        if !state.finished || state.darts_thrown == 0 || state.turn_number == 0 {
            return None;
        }

        let finishing_turn_darts = ((state.darts_thrown - 1) % DARTS_PER_TURN) + 1;
        let stat_darts = (state.turn_number - 1) * DARTS_PER_TURN + finishing_turn_darts;
        let average_per_dart = STARTING_SCORE as f64 / stat_darts as f64;

        Some(Self {
            finishing_turn_darts,
            stat_darts,
            average_per_dart,
            three_dart_average: average_per_dart * DARTS_PER_TURN as f64,
            total_turns: stat_darts as f64 / DARTS_PER_TURN as f64,
        })
    }
}
