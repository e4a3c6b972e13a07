use crate::reports;
use clap::Args;
use darts501::accuracy::{
    AccuracyProfile, DEFAULT_DOUBLE_PCT, DEFAULT_SINGLE_PCT, DEFAULT_TRIPLE_PCT,
};
use darts501::config::AccuracyArgs;
use darts501::error::DartsResult;
use darts501::game::Game;
use darts501::input::{parse_aim, parse_percentage};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub accuracy: AccuracyArgs,

    /// Skip the accuracy prompts and use defaults for anything not given
    #[arg(long, default_value_t = false)]
    pub defaults: bool,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: PlayArgs) -> DartsResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(&mut stdin.lock(), &mut stdout.lock(), &args)
}

/// Reads one line; `None` once input is closed.
fn read_line<R: BufRead>(input: &mut R) -> DartsResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> DartsResult<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    read_line(input)
}

fn ask_percentage<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: f64,
) -> DartsResult<f64> {
    loop {
        let text = format!("{} accuracy % [default: {}]: ", label, default);
        let Some(line) = prompt(input, out, &text)? else {
            return Ok(default);
        };
        match parse_percentage(&line, default) {
            Ok(v) => return Ok(v),
            Err(e) => {
                warn!("{}", e);
                writeln!(out, "Please enter a value between 1 and 100")?;
            }
        }
    }
}

fn collect_profile<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    args: &PlayArgs,
) -> DartsResult<AccuracyProfile> {
    if args.defaults || args.accuracy.is_complete() {
        return args.accuracy.resolve();
    }

    writeln!(out, "🎯 Accuracy Settings")?;
    writeln!(
        out,
        "Enter your accuracy percentages (1-100) or press Enter for defaults:"
    )?;

    let mut answers = args.accuracy.clone();
    if answers.single.is_none() {
        answers.single = Some(ask_percentage(input, out, "Singles", DEFAULT_SINGLE_PCT)?);
    }
    if answers.double.is_none() {
        answers.double = Some(ask_percentage(input, out, "Doubles", DEFAULT_DOUBLE_PCT)?);
    }
    if answers.triple.is_none() {
        answers.triple = Some(ask_percentage(input, out, "Triples", DEFAULT_TRIPLE_PCT)?);
    }
    answers.resolve()
}

pub fn play_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    args: &PlayArgs,
) -> DartsResult<()> {
    writeln!(out, "🎯 Welcome to Terminal Darts - 501!")?;
    writeln!(
        out,
        "Rules: Start with 501 points, finish on a double, 3 darts per turn"
    )?;
    writeln!(
        out,
        "Input format: t20 (triple 20), d19 (double 19), s16 (single 16)"
    )?;
    writeln!(out, "Special: ob (outer bull = 25), db (double bull = 50)")?;
    writeln!(out, "{}", "=".repeat(50))?;

    let profile = collect_profile(input, out, args)?;
    reports::print_profile(out, &profile)?;

    let mut rng = if let Some(s) = args.seed {
        fastrand::Rng::with_seed(s)
    } else {
        fastrand::Rng::new()
    };
    let mut game = Game::new(profile);
    info!(seed = ?args.seed, "game started");

    while !game.is_finished() {
        writeln!(out, "\n--- Turn {} ---", game.state().turn_number)?;
        writeln!(out, "Current score: {}", game.state().score)?;

        loop {
            writeln!(out, "\nDart {}/3", game.current_turn().len() + 1)?;
            let Some(line) = prompt(
                input,
                out,
                "What are you aiming for? (e.g., t20, d19, s16, ob, db) [default: t20]: ",
            )?
            else {
                writeln!(out, "\nGame abandoned.")?;
                return Ok(());
            };

            // Rejected aims are re-prompted and never cost a dart.
            let target = match parse_aim(&line) {
                Ok(t) => t,
                Err(e) => {
                    warn!("{}", e);
                    writeln!(out, "Invalid input! Use format like: t20, d19, s16, ob, db")?;
                    continue;
                }
            };
            if line.trim().is_empty() {
                writeln!(out, "Aiming for t20 (default)")?;
            }

            let report = game.throw_at(target, &mut rng)?;
            reports::print_throw(out, &report)?;

            if game.current_turn().is_empty() {
                break;
            }
            writeln!(out, "Score remaining: {}", report.score_after)?;
        }

        if let Some(turn) = game.last_turn() {
            reports::print_turn_summary(out, turn)?;
        }

        if !game.is_finished() {
            reports::print_checkout_hint(out, game.state().score)?;
            if prompt(input, out, "\nPress Enter to continue to next turn...")?.is_none() {
                writeln!(out, "\nGame abandoned.")?;
                return Ok(());
            }
        }
    }

    if let Some(stats) = game.statistics() {
        reports::print_statistics(out, game.state(), &stats)?;
    }
    writeln!(out, "\nThanks for playing!")?;
    Ok(())
}
