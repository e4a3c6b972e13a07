use crate::accuracy::AccuracyProfile;
use crate::board::{neighbors_of, Multiplier, Target, ThrowOutcome, NUMBERED};
use tracing::debug;

/// Share of outer-bull misses that drift inward onto the inner bull.
/// The rest overshoot onto a random single.
pub const OUTER_BULL_CLOSE_MISS: f64 = 0.30;

/// Share of inner-bull misses that land on the outer bull.
/// The rest overshoot onto a random single.
pub const INNER_BULL_CLOSE_MISS: f64 = 0.60;

/// A source of uniform draws in [0, 1).
///
/// The resolver takes one draw per decision point, so a scripted source can
/// replay any throw exactly.
pub trait RandomSource {
    fn uniform(&mut self) -> f64;

    /// Index in `0..len` from a single draw. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        let idx = (self.uniform() * len as f64) as usize;
        idx.min(len - 1)
    }
}

impl RandomSource for fastrand::Rng {
    fn uniform(&mut self) -> f64 {
        self.f64()
    }
}

/// Resolves an aimed throw into where the dart actually landed.
pub fn resolve<R: RandomSource + ?Sized>(
    target: &Target,
    profile: &AccuracyProfile,
    rng: &mut R,
) -> ThrowOutcome {
    let outcome = if target.segment().is_bull() {
        resolve_bull(target, profile, rng)
    } else {
        resolve_number(target, profile, rng)
    };
    debug!(aim = %target, landed = %outcome, points = outcome.points(), "throw resolved");
    outcome
}

fn resolve_bull<R: RandomSource + ?Sized>(
    target: &Target,
    profile: &AccuracyProfile,
    rng: &mut R,
) -> ThrowOutcome {
    let aimed_inner = target.multiplier() == Multiplier::Double;
    let accuracy = profile.get(if aimed_inner {
        Multiplier::Double
    } else {
        Multiplier::Single
    });

    if rng.uniform() < accuracy {
        return ThrowOutcome::from(*target);
    }

    let (close_miss, other_bull) = if aimed_inner {
        (INNER_BULL_CLOSE_MISS, Target::OUTER_BULL)
    } else {
        (OUTER_BULL_CLOSE_MISS, Target::INNER_BULL)
    };

    if rng.uniform() < close_miss {
        ThrowOutcome::from(other_bull)
    } else {
        random_single(rng)
    }
}

/// Overshoot off the bull: a single on any of the 20 wedges, uniformly.
fn random_single<R: RandomSource + ?Sized>(rng: &mut R) -> ThrowOutcome {
    ThrowOutcome::hit(Multiplier::Single, NUMBERED[rng.pick(NUMBERED.len())])
}

fn resolve_number<R: RandomSource + ?Sized>(
    target: &Target,
    profile: &AccuracyProfile,
    rng: &mut R,
) -> ThrowOutcome {
    if rng.uniform() < profile.get(target.multiplier()) {
        return ThrowOutcome::from(*target);
    }

    let candidates = miss_candidates(target);
    candidates[rng.pick(candidates.len())]
}

/// Where a missed dart aimed at a numbered wedge can land.
///
/// Every entry is equally likely; listing an entry twice doubles its weight.
pub fn miss_candidates(target: &Target) -> Vec<ThrowOutcome> {
    use Multiplier::*;

    let segment = target.segment();
    let Some((left, right)) = neighbors_of(segment) else {
        return vec![ThrowOutcome::Miss];
    };

    let mut options = Vec::with_capacity(12);
    for adj in [left, right] {
        options.push(ThrowOutcome::hit(Single, adj));
        options.push(ThrowOutcome::hit(Single, adj));
    }

    match target.multiplier() {
        Triple => {
            options.push(ThrowOutcome::hit(Single, segment));
            options.push(ThrowOutcome::hit(Triple, left));
            options.push(ThrowOutcome::hit(Triple, right));
        }
        Double => {
            options.push(ThrowOutcome::hit(Single, segment));
            options.push(ThrowOutcome::hit(Double, left));
            options.push(ThrowOutcome::hit(Double, right));
            // The double ring is the outer edge of the board.
            options.push(ThrowOutcome::Miss);
        }
        Single => {
            options.push(ThrowOutcome::hit(Double, segment));
            options.push(ThrowOutcome::hit(Triple, segment));
            for adj in [left, right] {
                options.push(ThrowOutcome::hit(Double, adj));
                options.push(ThrowOutcome::hit(Triple, adj));
            }
        }
    }

    options
}

/// Binds an accuracy profile to the resolution model for one game.
#[derive(Debug, Clone, Copy)]
pub struct ThrowResolver {
    profile: AccuracyProfile,
}

impl ThrowResolver {
    pub fn new(profile: AccuracyProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &AccuracyProfile {
        &self.profile
    }

    pub fn resolve<R: RandomSource + ?Sized>(&self, target: &Target, rng: &mut R) -> ThrowOutcome {
        resolve(target, &self.profile, rng)
    }
}
