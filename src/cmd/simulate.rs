use crate::reports;
use clap::Args;
use darts501::config::{AccuracyArgs, SimulationParams};
use darts501::error::DartsResult;
use darts501::simulation;
use std::io;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub accuracy: AccuracyArgs,

    #[command(flatten)]
    pub params: SimulationParams,
}

pub fn run(args: SimulateArgs) -> DartsResult<()> {
    let profile = args.accuracy.resolve()?;
    let report = simulation::run(profile, args.params.games, args.params.seed)?;

    if let Some(path) = &args.params.csv {
        info!("Writing {} game rows to {}", report.records.len(), path);
        simulation::write_csv(path, &report.records)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.params.json {
        simulation::write_json(&mut out, &report.summary)?;
    } else {
        reports::print_simulation_summary(&mut out, &report.summary)?;
    }
    Ok(())
}
