#![allow(dead_code)]

use darts501::board::{Multiplier, Target, ThrowOutcome};
use darts501::resolver::RandomSource;
use std::collections::VecDeque;

/// Replays a fixed list of uniform draws. Panics if the resolver asks for
/// more draws than the test planned.
pub struct ScriptedRng {
    draws: VecDeque<f64>,
}

impl ScriptedRng {
    pub fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRng {
    fn uniform(&mut self) -> f64 {
        self.draws.pop_front().expect("ScriptedRng ran out of draws")
    }
}

/// Draw that makes `pick(len)` return `index`.
pub fn draw_for(index: usize, len: usize) -> f64 {
    (index as f64 + 0.5) / len as f64
}

pub fn hit(m: Multiplier, n: u8) -> ThrowOutcome {
    ThrowOutcome::from(Target::number(m, n).unwrap())
}

pub fn single(n: u8) -> ThrowOutcome {
    hit(Multiplier::Single, n)
}

pub fn double(n: u8) -> ThrowOutcome {
    hit(Multiplier::Double, n)
}

pub fn triple(n: u8) -> ThrowOutcome {
    hit(Multiplier::Triple, n)
}
