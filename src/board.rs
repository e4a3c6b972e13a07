use crate::error::{DartsError, DartsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Numbered segments in clockwise order, starting from the top of the board.
/// Adjacency in this ring decides which wedges a near miss can land in.
pub const RING: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

pub const BULL_VALUE: u8 = 25;
pub const OUTER_BULL_POINTS: u32 = 25;
pub const INNER_BULL_POINTS: u32 = 50;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Multiplier {
    Single,
    Double,
    Triple,
}

impl Multiplier {
    pub fn factor(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Prefix letter used in aim strings (`s`, `d`, `t`).
    pub fn prefix(self) -> char {
        match self {
            Self::Single => 's',
            Self::Double => 'd',
            Self::Triple => 't',
        }
    }

    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Single),
            'd' => Some(Self::Double),
            't' => Some(Self::Triple),
            _ => None,
        }
    }
}

/// A board segment: one of the numbered wedges 1..=20, or the bull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Segment(u8);

/// The numbered wedges in numeric order, 1 first.
pub const NUMBERED: [Segment; 20] = {
    let mut all = [Segment(1); 20];
    let mut i = 0;
    while i < 20 {
        all[i] = Segment(i as u8 + 1);
        i += 1;
    }
    all
};

impl Segment {
    pub const BULL: Segment = Segment(BULL_VALUE);

    pub fn number(n: u8) -> Option<Self> {
        if (1..=20).contains(&n) {
            Some(Segment(n))
        } else {
            None
        }
    }

    pub fn is_bull(self) -> bool {
        self.0 == BULL_VALUE
    }

    /// Face value of the segment (25 for the bull).
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Segment {
    type Error = DartsError;

    fn try_from(n: u8) -> DartsResult<Self> {
        if n == BULL_VALUE {
            return Ok(Segment::BULL);
        }
        Segment::number(n).ok_or_else(|| DartsError::Validation(format!("No segment {}", n)))
    }
}

impl From<Segment> for u8 {
    fn from(s: Segment) -> u8 {
        s.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bull() {
            write!(f, "Bull")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Ring neighbors of a numbered segment as (previous, next) in clockwise order.
/// The bull sits outside the ring and has none.
pub fn neighbors_of(segment: Segment) -> Option<(Segment, Segment)> {
    let idx = RING.iter().position(|&n| n == segment.value())?;
    let prev = RING[(idx + RING.len() - 1) % RING.len()];
    let next = RING[(idx + 1) % RING.len()];
    Some((Segment(prev), Segment(next)))
}

/// Points scored by landing in `segment` with `multiplier`.
/// Bull values are fixed: single 25, double 50.
pub fn points_for(multiplier: Multiplier, segment: Segment) -> u32 {
    if segment.is_bull() {
        match multiplier {
            Multiplier::Double => INNER_BULL_POINTS,
            _ => OUTER_BULL_POINTS,
        }
    } else {
        segment.value() as u32 * multiplier.factor()
    }
}

/// Writes "Triple 20", "Single 5", "Outer Bull" or "Double Bull".
fn describe(f: &mut fmt::Formatter<'_>, multiplier: Multiplier, segment: Segment) -> fmt::Result {
    if segment.is_bull() {
        match multiplier {
            Multiplier::Double => write!(f, "Double Bull"),
            _ => write!(f, "Outer Bull"),
        }
    } else {
        write!(f, "{} {}", multiplier, segment)
    }
}

/// An aim point. Triple bull does not exist and cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    multiplier: Multiplier,
    segment: Segment,
}

impl Target {
    pub const OUTER_BULL: Target = Target {
        multiplier: Multiplier::Single,
        segment: Segment::BULL,
    };
    pub const INNER_BULL: Target = Target {
        multiplier: Multiplier::Double,
        segment: Segment::BULL,
    };
    pub const TREBLE_TWENTY: Target = Target {
        multiplier: Multiplier::Triple,
        segment: Segment(20),
    };

    pub fn new(multiplier: Multiplier, segment: Segment) -> DartsResult<Self> {
        if segment.is_bull() && multiplier == Multiplier::Triple {
            return Err(DartsError::Validation(
                "Triple bull is not a legal target".to_string(),
            ));
        }
        Ok(Self {
            multiplier,
            segment,
        })
    }

    /// Target on a numbered wedge; fails outside 1..=20.
    pub fn number(multiplier: Multiplier, n: u8) -> DartsResult<Self> {
        let segment = Segment::number(n)
            .ok_or_else(|| DartsError::Validation(format!("Segment {} is not on the board", n)))?;
        Self::new(multiplier, segment)
    }

    pub fn single(n: u8) -> DartsResult<Self> {
        Self::number(Multiplier::Single, n)
    }

    pub fn double(n: u8) -> DartsResult<Self> {
        Self::number(Multiplier::Double, n)
    }

    pub fn triple(n: u8) -> DartsResult<Self> {
        Self::number(Multiplier::Triple, n)
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn points(&self) -> u32 {
        points_for(self.multiplier, self.segment)
    }

    /// Short aim code as typed by a player (`t20`, `ob`, `db`).
    pub fn code(&self) -> String {
        if self.segment.is_bull() {
            match self.multiplier {
                Multiplier::Double => "db".to_string(),
                _ => "ob".to_string(),
            }
        } else {
            format!("{}{}", self.multiplier.prefix(), self.segment.value())
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe(f, self.multiplier, self.segment)
    }
}

/// Where a resolved dart actually landed.
///
/// A `Hit` is only built from a legal multiplier/segment pair, with `points`
/// derived from them; outside the crate it comes from a [`Target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ThrowOutcome {
    #[non_exhaustive]
    Hit {
        multiplier: Multiplier,
        segment: Segment,
        points: u32,
    },
    Miss,
}

impl ThrowOutcome {
    /// Callers pass a pair a [`Target`] would accept; triple bull is not one.
    pub(crate) fn hit(multiplier: Multiplier, segment: Segment) -> Self {
        debug_assert!(!(segment.is_bull() && multiplier == Multiplier::Triple));
        Self::Hit {
            multiplier,
            segment,
            points: points_for(multiplier, segment),
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Self::Hit { points, .. } => *points,
            Self::Miss => 0,
        }
    }

    /// True for any double, the inner bull included.
    pub fn is_double(&self) -> bool {
        matches!(
            self,
            Self::Hit {
                multiplier: Multiplier::Double,
                ..
            }
        )
    }

    /// True when the dart landed exactly where it was aimed.
    pub fn matches(&self, target: &Target) -> bool {
        match self {
            Self::Hit {
                multiplier,
                segment,
                ..
            } => *multiplier == target.multiplier && *segment == target.segment,
            Self::Miss => false,
        }
    }
}

impl From<Target> for ThrowOutcome {
    fn from(t: Target) -> Self {
        Self::hit(t.multiplier, t.segment)
    }
}

impl fmt::Display for ThrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit {
                multiplier,
                segment,
                ..
            } => describe(f, *multiplier, *segment),
            Self::Miss => write!(f, "Miss"),
        }
    }
}
