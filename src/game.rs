use crate::accuracy::AccuracyProfile;
use crate::board::{Target, ThrowOutcome};
use crate::error::{DartsError, DartsResult};
use crate::resolver::{RandomSource, ThrowResolver};
use crate::scoring::{
    is_checkout_reachable, GameState, ScoringStateMachine, ThrowVerdict, MAX_CHECKOUT,
};
use crate::stats::GameStats;
use serde::Serialize;
use std::mem;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThrowReport {
    pub target: Target,
    pub outcome: ThrowOutcome,
    pub score_after: u32,
    pub verdict: ThrowVerdict,
    /// 1-based position of the dart within its turn.
    pub dart_in_turn: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    pub turn_number: u32,
    pub start_score: u32,
    pub end_score: u32,
    pub throws: Vec<ThrowReport>,
    pub busted: bool,
    pub finished: bool,
}

impl TurnReport {
    /// Points taken off the score this turn; zero for a bust.
    pub fn points(&self) -> u32 {
        self.start_score - self.end_score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckoutHint {
    Finishable,
    Difficult,
}

/// Hint shown after a turn once the score is within three-dart range.
pub fn checkout_hint(score: u32) -> Option<CheckoutHint> {
    if score == 0 || score > MAX_CHECKOUT {
        return None;
    }
    Some(if is_checkout_reachable(score) {
        CheckoutHint::Finishable
    } else {
        CheckoutHint::Difficult
    })
}

/// One player's 501 leg: resolver, state machine and the turn history.
pub struct Game {
    resolver: ThrowResolver,
    machine: ScoringStateMachine,
    current: Vec<ThrowReport>,
    current_turn_number: u32,
    current_start_score: u32,
    turns: Vec<TurnReport>,
}

impl Game {
    pub fn new(profile: AccuracyProfile) -> Self {
        Self::from_machine(profile, ScoringStateMachine::new())
    }

    /// A game picked up at the start of a turn with `score` left.
    pub fn starting_at(profile: AccuracyProfile, score: u32) -> DartsResult<Self> {
        Ok(Self::from_machine(
            profile,
            ScoringStateMachine::with_score(score)?,
        ))
    }

    fn from_machine(profile: AccuracyProfile, machine: ScoringStateMachine) -> Self {
        let state = *machine.state();
        Self {
            resolver: ThrowResolver::new(profile),
            machine,
            current: Vec::with_capacity(3),
            current_turn_number: state.turn_number,
            current_start_score: state.score,
            turns: Vec::new(),
        }
    }

    /// Throws one dart at `target` and applies the result.
    pub fn throw_at<R: RandomSource + ?Sized>(
        &mut self,
        target: Target,
        rng: &mut R,
    ) -> DartsResult<ThrowReport> {
        if self.is_finished() {
            return Err(DartsError::GameOver);
        }
        let outcome = self.resolver.resolve(&target, rng);
        self.record(target, outcome)
    }

    /// Applies an already resolved dart.
    pub fn record(&mut self, target: Target, outcome: ThrowOutcome) -> DartsResult<ThrowReport> {
        if self.current.is_empty() {
            self.current_turn_number = self.machine.state().turn_number;
            self.current_start_score = self.machine.turn_start_score();
        }

        let verdict = self.machine.apply_throw(&outcome)?;
        let report = ThrowReport {
            target,
            outcome,
            score_after: self.machine.state().score,
            verdict,
            dart_in_turn: self.current.len() as u32 + 1,
        };
        self.current.push(report);

        if self.machine.at_turn_start() {
            self.close_turn(verdict);
        }
        Ok(report)
    }

    fn close_turn(&mut self, verdict: ThrowVerdict) {
        let turn = TurnReport {
            turn_number: self.current_turn_number,
            start_score: self.current_start_score,
            end_score: self.machine.state().score,
            throws: mem::take(&mut self.current),
            busted: verdict == ThrowVerdict::Bust,
            finished: verdict == ThrowVerdict::Finish,
        };
        info!(
            turn = turn.turn_number,
            points = turn.points(),
            remaining = turn.end_score,
            busted = turn.busted,
            finished = turn.finished,
            "turn complete"
        );
        self.turns.push(turn);
    }

    pub fn state(&self) -> &GameState {
        self.machine.state()
    }

    pub fn profile(&self) -> &AccuracyProfile {
        self.resolver.profile()
    }

    pub fn is_finished(&self) -> bool {
        self.machine.state().finished
    }

    /// Throws of the turn in progress.
    pub fn current_turn(&self) -> &[ThrowReport] {
        &self.current
    }

    pub fn turns(&self) -> &[TurnReport] {
        &self.turns
    }

    pub fn last_turn(&self) -> Option<&TurnReport> {
        self.turns.last()
    }

    pub fn statistics(&self) -> Option<GameStats> {
        GameStats::from_state(self.machine.state())
    }
}
