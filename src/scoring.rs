use crate::board::ThrowOutcome;
use crate::error::{DartsError, DartsResult};
use serde::Serialize;
use tracing::debug;

pub const STARTING_SCORE: u32 = 501;
pub const DARTS_PER_TURN: u32 = 3;

/// Highest score that can be taken out in three darts (T20 T20 DB).
pub const MAX_CHECKOUT: u32 = 170;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub score: u32,
    /// Resolved throws, bust-causing ones included.
    pub darts_thrown: u32,
    pub turn_number: u32,
    pub finished: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: STARTING_SCORE,
            darts_thrown: 0,
            turn_number: 1,
            finished: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThrowVerdict {
    Continue,
    Bust,
    Finish,
}

/// Simplified checkout window: anything above 170 is still "in play",
/// otherwise only even scores up to 40 and the bull (50) count as finishable.
pub fn is_checkout_reachable(score: u32) -> bool {
    if score > MAX_CHECKOUT {
        return true;
    }
    if score <= 1 {
        return false;
    }
    (score % 2 == 0 && score <= 40) || score == 50
}

/// Owns the game state and enforces bust, checkout and turn rules.
#[derive(Debug, Clone)]
pub struct ScoringStateMachine {
    state: GameState,
    turn_start_score: u32,
    darts_in_turn: u32,
}

impl Default for ScoringStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringStateMachine {
    pub fn new() -> Self {
        Self {
            state: GameState::default(),
            turn_start_score: STARTING_SCORE,
            darts_in_turn: 0,
        }
    }

    /// Starts at the beginning of a turn with `score` remaining.
    pub fn with_score(score: u32) -> DartsResult<Self> {
        if score < 2 || score > STARTING_SCORE {
            return Err(DartsError::Validation(format!(
                "Starting score must be in 2..={}, got {}",
                STARTING_SCORE, score
            )));
        }
        Ok(Self {
            state: GameState {
                score,
                ..GameState::default()
            },
            turn_start_score: score,
            darts_in_turn: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn_start_score(&self) -> u32 {
        self.turn_start_score
    }

    /// Darts thrown so far in the current turn.
    pub fn darts_in_turn(&self) -> u32 {
        self.darts_in_turn
    }

    /// True before the first dart of a turn, i.e. right after a turn ended.
    pub fn at_turn_start(&self) -> bool {
        self.darts_in_turn == 0
    }

    pub fn apply_throw(&mut self, outcome: &ThrowOutcome) -> DartsResult<ThrowVerdict> {
        if self.state.finished {
            return Err(DartsError::GameOver);
        }

        self.state.darts_thrown += 1;
        self.darts_in_turn += 1;

        let points = outcome.points();
        let verdict = if points > self.state.score {
            ThrowVerdict::Bust
        } else {
            match self.state.score - points {
                1 => ThrowVerdict::Bust,
                0 if outcome.is_double() => ThrowVerdict::Finish,
                0 => ThrowVerdict::Bust,
                _ => ThrowVerdict::Continue,
            }
        };

        match verdict {
            ThrowVerdict::Bust => {
                debug!(
                    score = self.state.score,
                    points,
                    revert_to = self.turn_start_score,
                    "bust"
                );
                self.state.score = self.turn_start_score;
                self.end_turn();
            }
            ThrowVerdict::Finish => {
                self.state.score = 0;
                self.state.finished = true;
                self.darts_in_turn = 0;
            }
            ThrowVerdict::Continue => {
                self.state.score -= points;
                if self.darts_in_turn == DARTS_PER_TURN {
                    self.end_turn();
                }
            }
        }

        Ok(verdict)
    }

    fn end_turn(&mut self) {
        self.state.turn_number += 1;
        self.darts_in_turn = 0;
        self.turn_start_score = self.state.score;
    }
}
