//! Aim-string and accuracy parsing for the console front end.

use crate::accuracy::validate_percentage;
use crate::board::{Multiplier, Target};
use crate::error::{DartsError, DartsResult};
use std::str::FromStr;

/// Aim used when the player just presses Enter.
pub const DEFAULT_AIM: &str = "t20";

/// Parses `ob`, `db`, or `[sdt]` followed by 1..=20 (no leading zeros).
/// Surrounding whitespace and case are ignored.
pub fn parse_target(input: &str) -> DartsResult<Target> {
    let s = input.trim().to_ascii_lowercase();
    match s.as_str() {
        "ob" => return Ok(Target::OUTER_BULL),
        "db" => return Ok(Target::INNER_BULL),
        _ => {}
    }

    let fail = || DartsError::Parse(input.trim().to_string());

    let mut chars = s.chars();
    let multiplier = chars
        .next()
        .and_then(Multiplier::from_prefix)
        .ok_or_else(fail)?;
    let digits = chars.as_str();

    let well_formed = !digits.is_empty()
        && digits.len() <= 2
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !digits.starts_with('0');
    if !well_formed {
        return Err(fail());
    }

    let n: u8 = digits.parse().map_err(|_| fail())?;
    Target::number(multiplier, n).map_err(|_| fail())
}

/// Like [`parse_target`], but an empty line means [`DEFAULT_AIM`].
pub fn parse_aim(input: &str) -> DartsResult<Target> {
    if input.trim().is_empty() {
        parse_target(DEFAULT_AIM)
    } else {
        parse_target(input)
    }
}

impl FromStr for Target {
    type Err = DartsError;

    fn from_str(s: &str) -> DartsResult<Self> {
        parse_target(s)
    }
}

/// Reads one accuracy answer: empty picks `default`, otherwise a number in [1, 100].
pub fn parse_percentage(input: &str, default: f64) -> DartsResult<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Ok(default);
    }
    let value: f64 = s
        .parse()
        .map_err(|_| DartsError::Validation(format!("'{}' is not a number", s)))?;
    validate_percentage(value)
}
