use crate::board::Multiplier;
use crate::error::{DartsError, DartsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SINGLE_PCT: f64 = 80.0;
pub const DEFAULT_DOUBLE_PCT: f64 = 15.0;
pub const DEFAULT_TRIPLE_PCT: f64 = 10.0;

/// Hit probabilities per ring, each in (0, 1].
///
/// Fields are private so a profile can only be obtained through a validating
/// constructor; the resolver relies on that and never re-checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct AccuracyProfile {
    single: f64,
    double: f64,
    triple: f64,
}

#[derive(Deserialize)]
struct RawProfile {
    single: f64,
    double: f64,
    triple: f64,
}

impl TryFrom<RawProfile> for AccuracyProfile {
    type Error = DartsError;

    fn try_from(raw: RawProfile) -> DartsResult<Self> {
        AccuracyProfile::new(raw.single, raw.double, raw.triple)
    }
}

impl Default for AccuracyProfile {
    fn default() -> Self {
        Self {
            single: DEFAULT_SINGLE_PCT / 100.0,
            double: DEFAULT_DOUBLE_PCT / 100.0,
            triple: DEFAULT_TRIPLE_PCT / 100.0,
        }
    }
}

impl AccuracyProfile {
    /// Builds a profile from probabilities. Each must lie in (0, 1].
    pub fn new(single: f64, double: f64, triple: f64) -> DartsResult<Self> {
        for (name, p) in [("single", single), ("double", double), ("triple", triple)] {
            if !(p > 0.0 && p <= 1.0) {
                return Err(DartsError::Validation(format!(
                    "{} accuracy must be in (0, 1], got {}",
                    name, p
                )));
            }
        }
        Ok(Self {
            single,
            double,
            triple,
        })
    }

    /// Builds a profile from percentages in [1, 100], the range the console accepts.
    pub fn from_percentages(single: f64, double: f64, triple: f64) -> DartsResult<Self> {
        for p in [single, double, triple] {
            validate_percentage(p)?;
        }
        Self::new(single / 100.0, double / 100.0, triple / 100.0)
    }

    /// Every throw lands exactly where it is aimed.
    pub fn perfect() -> Self {
        Self {
            single: 1.0,
            double: 1.0,
            triple: 1.0,
        }
    }

    pub fn get(&self, multiplier: Multiplier) -> f64 {
        match multiplier {
            Multiplier::Single => self.single,
            Multiplier::Double => self.double,
            Multiplier::Triple => self.triple,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DartsResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

pub fn validate_percentage(p: f64) -> DartsResult<f64> {
    if (1.0..=100.0).contains(&p) {
        Ok(p)
    } else {
        Err(DartsError::Validation(format!(
            "Accuracy must be between 1 and 100, got {}",
            p
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_probabilities() {
        assert!(AccuracyProfile::new(0.0, 0.5, 0.5).is_err());
        assert!(AccuracyProfile::new(0.5, 1.01, 0.5).is_err());
        assert!(AccuracyProfile::new(0.5, 0.5, f64::NAN).is_err());
        assert!(AccuracyProfile::new(1.0, 0.01, 0.5).is_ok());
    }

    #[test]
    fn defaults_match_console_defaults() {
        let p = AccuracyProfile::default();
        assert_eq!(p.get(Multiplier::Single), 0.8);
        assert_eq!(p.get(Multiplier::Double), 0.15);
        assert_eq!(p.get(Multiplier::Triple), 0.1);
    }

    #[test]
    fn json_goes_through_validation() {
        let ok: AccuracyProfile =
            serde_json::from_str(r#"{"single":0.9,"double":0.2,"triple":0.3}"#).unwrap();
        assert_eq!(ok.get(Multiplier::Triple), 0.3);

        let bad = serde_json::from_str::<AccuracyProfile>(
            r#"{"single":90,"double":0.2,"triple":0.3}"#,
        );
        assert!(bad.is_err());
    }
}
