use crate::board::{Multiplier, Target};

/// Preferred leaves when setting up a finish, best first.
const SETUP_LEAVES: [u32; 2] = [32, 40];

/// Aim chosen by the auto-player for the given remaining score.
///
/// Scores are taken through the same simplified checkout window the state
/// machine reports: the bull at 50, a double on even scores up to 40, a
/// single that sets up 32 or 40 below 61, treble twenty otherwise.
pub fn suggest_target(score: u32) -> Target {
    if score == 50 {
        return Target::INNER_BULL;
    }
    if (2..=40).contains(&score) && score % 2 == 0 {
        return aim(Multiplier::Double, score / 2);
    }
    if score <= 60 {
        for leave in SETUP_LEAVES {
            if score > leave && score - leave <= 20 {
                return aim(Multiplier::Single, score - leave);
            }
        }
        // Odd score below 33: a single 1 leaves an even double.
        return aim(Multiplier::Single, 1);
    }
    if score == 61 {
        // T20 would leave 1.
        return aim(Multiplier::Triple, 19);
    }
    Target::TREBLE_TWENTY
}

fn aim(multiplier: Multiplier, n: u32) -> Target {
    u8::try_from(n)
        .ok()
        .and_then(|n| Target::number(multiplier, n).ok())
        .unwrap_or(Target::TREBLE_TWENTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_on_doubles_and_bull() {
        assert_eq!(suggest_target(40), Target::double(20).unwrap());
        assert_eq!(suggest_target(2), Target::double(1).unwrap());
        assert_eq!(suggest_target(50), Target::INNER_BULL);
    }

    #[test]
    fn sets_up_a_double() {
        assert_eq!(suggest_target(45), Target::single(13).unwrap());
        assert_eq!(suggest_target(57), Target::single(17).unwrap());
        assert_eq!(suggest_target(7), Target::single(1).unwrap());
        assert_eq!(suggest_target(61), Target::triple(19).unwrap());
        assert_eq!(suggest_target(501), Target::TREBLE_TWENTY);
    }

    #[test]
    fn every_suggestion_is_scoreable() {
        for score in 2..=501 {
            let t = suggest_target(score);
            assert!(t.points() <= score || score > 60, "score {} aim {}", score, t);
        }
    }
}
