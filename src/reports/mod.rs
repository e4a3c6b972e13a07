use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use darts501::accuracy::AccuracyProfile;
use darts501::board::{Multiplier, ThrowOutcome};
use darts501::game::{checkout_hint, CheckoutHint, ThrowReport, TurnReport};
use darts501::scoring::{GameState, ThrowVerdict};
use darts501::simulation::SimulationSummary;
use darts501::stats::GameStats;
use std::io::{self, Write};

fn pct(p: f64) -> String {
    format!("{:.0}%", p * 100.0)
}

pub fn print_profile<W: Write>(out: &mut W, profile: &AccuracyProfile) -> io::Result<()> {
    writeln!(out, "\nAccuracy settings confirmed:")?;
    writeln!(
        out,
        "Singles: {} | Doubles: {} | Triples: {}",
        pct(profile.get(Multiplier::Single)),
        pct(profile.get(Multiplier::Double)),
        pct(profile.get(Multiplier::Triple))
    )?;
    writeln!(out, "{}", "=".repeat(50))
}

pub fn print_throw<W: Write>(out: &mut W, report: &ThrowReport) -> io::Result<()> {
    let points = report.outcome.points();
    match report.outcome {
        ThrowOutcome::Miss => writeln!(
            out,
            "Miss! You aimed for {} but missed the board entirely.",
            report.target
        )?,
        hit if hit.matches(&report.target) => {
            writeln!(out, "Great shot! You hit {} for {} points!", hit, points)?
        }
        hit => writeln!(
            out,
            "You aimed for {} but hit {} for {} points.",
            report.target, hit, points
        )?,
    }

    match report.verdict {
        ThrowVerdict::Bust => writeln!(
            out,
            "BUST! Score reverts to {}. Turn over.",
            report.score_after
        ),
        ThrowVerdict::Finish => {
            writeln!(out, "\n🎯 GAME OVER! You finished with {}!", report.outcome)
        }
        ThrowVerdict::Continue => Ok(()),
    }
}

pub fn print_turn_summary<W: Write>(out: &mut W, turn: &TurnReport) -> io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Dart").add_attribute(Attribute::Bold),
        Cell::new("Aim"),
        Cell::new("Hit"),
        Cell::new("Pts"),
        Cell::new("Left"),
    ]);

    for t in &turn.throws {
        let left = match t.verdict {
            ThrowVerdict::Bust => Cell::new("BUST").fg(Color::Red),
            ThrowVerdict::Finish => Cell::new("0").fg(Color::Green),
            ThrowVerdict::Continue => Cell::new(t.score_after),
        };
        table.add_row(vec![
            Cell::new(t.dart_in_turn),
            Cell::new(t.target.code()),
            Cell::new(t.outcome.to_string()),
            Cell::new(t.outcome.points()),
            left,
        ]);
    }

    for i in [0, 3, 4] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    writeln!(
        out,
        "\nTurn {} summary ({} scored):",
        turn.turn_number,
        turn.points()
    )?;
    writeln!(out, "{}", table)
}

pub fn print_checkout_hint<W: Write>(out: &mut W, score: u32) -> io::Result<()> {
    match checkout_hint(score) {
        Some(CheckoutHint::Finishable) => writeln!(out, "You can finish! Score: {}", score),
        Some(CheckoutHint::Difficult) => writeln!(out, "Difficult finish - Score: {}", score),
        None => Ok(()),
    }
}

pub fn print_statistics<W: Write>(
    out: &mut W,
    state: &GameState,
    stats: &GameStats,
) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let rows: [(&str, String); 6] = [
        ("Darts thrown", state.darts_thrown.to_string()),
        ("Darts (stat)", stats.stat_darts.to_string()),
        ("Darts in final turn", stats.finishing_turn_darts.to_string()),
        ("Average per dart", format!("{:.2}", stats.average_per_dart)),
        ("3-dart average", format!("{:.2}", stats.three_dart_average)),
        ("Turns", format!("{:.2}", stats.total_turns)),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }

    writeln!(out, "\n📊 Game statistics")?;
    writeln!(out, "{}", table)
}

pub fn print_simulation_summary<W: Write>(
    out: &mut W,
    summary: &SimulationSummary,
) -> io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Games").add_attribute(Attribute::Bold),
        Cell::new("Finished"),
        Cell::new("Mean darts").fg(Color::Cyan),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("3-dart avg").fg(Color::Green),
        Cell::new("Busts").fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new(summary.games),
        Cell::new(summary.finished),
        Cell::new(format!("{:.2}", summary.mean_darts)),
        Cell::new(summary.min_darts),
        Cell::new(summary.max_darts),
        Cell::new(format!("{:.2}", summary.mean_three_dart_average)),
        Cell::new(summary.total_busts),
    ]);
    for i in 0..7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let p = &summary.profile;
    writeln!(
        out,
        "\nSimulation (seed {}) | Singles {} | Doubles {} | Triples {}",
        summary.base_seed,
        pct(p.get(Multiplier::Single)),
        pct(p.get(Multiplier::Double)),
        pct(p.get(Multiplier::Triple))
    )?;
    writeln!(out, "{}", table)
}
