//! Seeded random self-play runner.
//!
//! Usage:
//! `cargo run --release --bin random_selfplay -- --games 20 --seed 7`
//! `cargo run --release --bin random_selfplay -- --games 1 --pgn`
//!
//! Every ply is also applied, undone and re-applied to confirm that undo
//! restores the game exactly.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chess_rules_engine::engines::engine_random::RandomEngine;
use chess_rules_engine::engines::engine_trait::MoveChooser;
use chess_rules_engine::utils::pgn::engine_to_pgn;
use chess_rules_engine::{ChessRulesEngine, GameStatus};

#[derive(Parser, Debug)]
#[command(version, about = "Play seeded random games and check undo round-trips")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u32,

    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Print each finished game as PGN.
    #[arg(long)]
    pgn: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Default)]
struct Tally {
    white_wins: u32,
    black_wins: u32,
    stalemates: u32,
    unfinished: u32,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut tally = Tally::default();

    for game_idx in 0..args.games {
        let mut chooser = RandomEngine::with_seed(args.seed.wrapping_add(u64::from(game_idx)));
        let mut engine = ChessRulesEngine::new();

        while engine.is_active() && engine.move_log().len() < args.max_plies {
            let Some(mv) = chooser.choose_move(&engine) else {
                break;
            };

            let before = engine.clone();
            engine.apply_move(mv.from, mv.to).map_err(|e| e.to_string())?;
            engine.undo_move();
            if engine != before {
                error!(game = game_idx, %mv, "undo did not restore the game");
                return Err(format!("round-trip failure in game {game_idx} at {mv}"));
            }
            engine.apply_move(mv.from, mv.to).map_err(|e| e.to_string())?;
        }

        let status = engine.status();
        match status {
            GameStatus::Checkmate {
                winner: chess_rules_engine::Color::Light,
            } => tally.white_wins += 1,
            GameStatus::Checkmate { .. } => tally.black_wins += 1,
            GameStatus::Stalemate => tally.stalemates += 1,
            GameStatus::Ongoing | GameStatus::Check(_) => tally.unfinished += 1,
        }
        info!(game = game_idx, plies = engine.move_log().len(), ?status, "game finished");

        if args.pgn {
            println!("{}", engine_to_pgn(&engine));
        }
    }

    println!(
        "games={} white_wins={} black_wins={} stalemates={} unfinished={}",
        args.games, tally.white_wins, tally.black_wins, tally.stalemates, tally.unfinished
    );
    Ok(())
}
