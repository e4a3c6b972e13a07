use crate::accuracy::{validate_percentage, AccuracyProfile};
use crate::board::Multiplier;
use crate::error::DartsResult;
use clap::Args;
use tracing::info;

/// Accuracy settings as given on the command line. Values are percentages.
#[derive(Args, Debug, Clone, Default)]
pub struct AccuracyArgs {
    /// Singles accuracy % (1-100)
    #[arg(long)]
    pub single: Option<f64>,
    /// Doubles accuracy % (1-100)
    #[arg(long)]
    pub double: Option<f64>,
    /// Triples accuracy % (1-100)
    #[arg(long)]
    pub triple: Option<f64>,
    /// JSON file with `single`, `double`, `triple` as fractions in (0, 1]
    #[arg(long)]
    pub profile: Option<String>,
}

impl AccuracyArgs {
    pub fn is_complete(&self) -> bool {
        self.profile.is_some()
            || (self.single.is_some() && self.double.is_some() && self.triple.is_some())
    }

    /// File values first, explicit flags on top, defaults for anything left.
    pub fn resolve(&self) -> DartsResult<AccuracyProfile> {
        let base = match &self.profile {
            Some(path) => {
                info!("Loading accuracy profile from {}", path);
                AccuracyProfile::load_from_file(path)?
            }
            None => AccuracyProfile::default(),
        };

        let pick = |flag: Option<f64>, m: Multiplier| -> DartsResult<f64> {
            match flag {
                Some(v) => Ok(validate_percentage(v)? / 100.0),
                None => Ok(base.get(m)),
            }
        };

        AccuracyProfile::new(
            pick(self.single, Multiplier::Single)?,
            pick(self.double, Multiplier::Double)?,
            pick(self.triple, Multiplier::Triple)?,
        )
    }
}

#[derive(Args, Debug, Clone)]
pub struct SimulationParams {
    #[arg(short = 'g', long, default_value_t = 1000)]
    pub games: usize,
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
    /// Write one row per game to this CSV file
    #[arg(long)]
    pub csv: Option<String>,
    /// Print the summary as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            games: 1000,
            seed: None,
            csv: None,
            json: false,
        }
    }
}
