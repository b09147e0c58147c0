//! Game simulator CLI - plays full games headlessly against the score store.
//!
//! Targets come from the regular location provider (with synthetic panorama
//! coverage), guesses land a random distance from each target, and every
//! finished game is appended to the JSON history like a real one.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use guessr::location::{CoverageGrid, LocationProvider};
use guessr::{GameConfig, GameFlow, HistoryRecord, JsonFileScoreStore};
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{play_game, GameResult, Guesser};
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "game-simulator")]
#[command(about = "Plays simulated guessing games and records their scores")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Rounds per game (defaults to GUESSR_TOTAL_ROUNDS or 5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    rounds: Option<u8>,

    /// Seed for target selection and guesses (defaults to GUESSR_RNG_SEED or random)
    #[arg(long)]
    seed: Option<u64>,

    /// Score history file (defaults to GUESSR_DATA_FILE or data/games.json)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Maximum distance in km between a target and the simulated guess
    #[arg(long, default_value = "1500")]
    guess_spread_km: f64,

    /// Share of 1-degree cells with panorama coverage (0.0 to 1.0)
    #[arg(long, default_value = "1.0")]
    coverage: f64,

    /// Probe lookups allowed per target (defaults to GUESSR_LOCATION_MAX_ATTEMPTS or 100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_attempts: Option<u32>,

    /// Leaderboard length
    #[arg(long, default_value = "10")]
    top: usize,

    /// Directory for per-game metrics; nothing is written when omitted
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Metrics format when --output-dir is set
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines instead of plain text
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Warnings and errors only unless RUST_LOG or --verbose says otherwise
    let filter = if args.verbose { "debug" } else { "warn" };
    if args.json_logs {
        guessr::telemetry::init_tracing(filter);
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(guessr::telemetry::env_filter(filter))
            .init();
    }

    let mut config = GameConfig::from_env()?;
    if let Some(rounds) = args.rounds {
        config.total_rounds = rounds;
    }
    if let Some(seed) = args.seed {
        config.rng_seed = Some(seed);
    }
    if let Some(path) = args.data_file.clone() {
        config.data_file = path;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.location_max_attempts = max_attempts;
    }
    info!(?config, games = args.games, "starting simulator");

    let store = JsonFileScoreStore::open(&config.data_file)?;
    let probe = CoverageGrid::new(args.coverage, config.rng_seed.unwrap_or_default());
    let locations = LocationProvider::new(
        probe,
        config.location_max_attempts,
        config.rng_seed,
    );
    let mut flow = GameFlow::new(locations, &store, config.total_rounds);
    let mut guesser = Guesser::new(
        args.guess_spread_km,
        config.rng_seed.map(|s| s.wrapping_add(1)),
    );

    let mut output_writer = match &args.output_dir {
        Some(dir) => Some(OutputWriter::new(dir, args.output_format)?),
        None => None,
    };

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        match play_game(&mut flow, &mut guesser) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                println!(
                    "Game {game_num}: {} points over {} rounds{}",
                    result.total_score,
                    result.rounds.len(),
                    if result.submitted { "" } else { " (not saved)" }
                );

                if let Some(writer) = output_writer.as_mut() {
                    let metrics = build_game_metrics(game_num, config.rng_seed, &result, duration_ms);
                    if let Err(e) = writer.write_game(&metrics) {
                        warn!("Failed to write metrics for game {}: {}", game_num, e);
                    }
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(code = e.code(), "Game {} failed: {}", game_num, e);
                flow.finish_game();
            }
        }
    }

    if let Some(writer) = output_writer {
        let (jsonl_path, csv_path) = writer.output_paths();
        if let Some(path) = jsonl_path {
            println!("Detailed results written to: {}", path.display());
        }
        println!("Summary CSV written to: {}", csv_path.display());
        writer.finish()?;
    }

    print_summary(&results, errors, start.elapsed(), args.games);
    print_leaderboard(&flow.leaderboard(args.top)?);
    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if results.is_empty() {
        return;
    }

    let totals: Vec<u32> = results.iter().map(|r| r.total_score).collect();
    let avg = totals.iter().map(|&t| f64::from(t)).sum::<f64>() / totals.len() as f64;
    let min = totals.iter().min().copied().unwrap_or(0);
    let max = totals.iter().max().copied().unwrap_or(0);
    let unsaved = results.iter().filter(|r| !r.submitted).count();
    println!("Scores: avg={avg:.1}, min={min}, max={max}");
    if unsaved > 0 {
        println!("Not saved: {unsaved}");
    }
}

fn print_leaderboard(top: &[HistoryRecord]) {
    println!("\n=== Best Scores ===");
    if top.is_empty() {
        println!("(no games recorded yet)");
        return;
    }
    for (rank, record) in top.iter().enumerate() {
        println!("{:>2}. {:>6} points  {}", rank + 1, record.score, record.timestamp);
    }
}
