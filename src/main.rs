//! Flappy Sim headless entry point
//!
//! Runs the autopilot against the simulation and prints a JSON summary.
//!
//! Usage: `flappy-sim [config.json] [--seed N] [--ticks N]`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use flappy_sim::consts::DEFAULT_SEED;
use flappy_sim::sim::autopilot::wants_flap;
use flappy_sim::sim::{GameEvent, TickInput};
use flappy_sim::{Game, GameConfig};

/// Fixed tick delta for the headless run
const DT: f32 = 1.0;
const DEFAULT_TICKS: u64 = 10_000;

/// Run the autopilot headless and print a JSON summary
#[derive(Debug, Parser)]
#[command(name = "flappy-sim", version)]
struct Args {
    /// JSON config file; missing fields take their defaults
    config: Option<PathBuf>,

    /// Seed for the obstacle RNG
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,
}

fn load_config(path: Option<&Path>) -> Result<GameConfig, String> {
    let Some(path) = path else {
        log::info!("Using default config");
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("reading {}: {e}", path.display()))?;
    let config = GameConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    score_line: &'static str,
    runs: u32,
    best_score: u32,
    total_score: u32,
    final_score: u32,
}

fn run(args: &Args) -> Result<Summary, String> {
    let config = load_config(args.config.as_deref())?;
    let mut game = Game::new(config, args.seed).map_err(|e| e.to_string())?;

    let mut best_score = 0;
    let mut total_score = 0;
    for _ in 0..args.ticks {
        let flap = wants_flap(game.session(), game.config());
        let input = TickInput::presses(usize::from(flap), DT);
        let events = game.tick(&input).map_err(|e| e.to_string())?;

        if events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            best_score = best_score.max(game.score());
            total_score += game.score();
            game.reset();
        }
    }
    best_score = best_score.max(game.score());
    total_score += game.score();

    Ok(Summary {
        seed: args.seed,
        ticks: args.ticks,
        score_line: game.config().score_line.as_str(),
        runs: game.resets() + 1,
        best_score,
        total_score,
        final_score: game.score(),
    })
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Flappy Sim (headless) starting...");

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to encode summary: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("{}", e);
            eprintln!("flappy-sim: {e}");
            ExitCode::FAILURE
        }
    }
}
