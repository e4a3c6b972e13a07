use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal darts: 501, finish on a double", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive leg of 501
    Play(cmd::play::PlayArgs),
    /// Auto-play many legs and report averages
    Simulate(cmd::simulate::SimulateArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the game transcript.
    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Play(args) => cmd::play::run(args),
        Commands::Simulate(args) => cmd::simulate::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
