//! Two-player terminal chess on top of the rules engine.
//!
//! Commands (one per line):
//! `e2e4` move, `moves e2` list destinations, `select e2` click a square,
//! `undo`, `new`, `board`, `fen`, `pgn`, `status`, `help`, `quit`.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_rules_engine::utils::algebraic::algebraic_to_square;
use chess_rules_engine::utils::long_algebraic::long_algebraic_to_move;
use chess_rules_engine::utils::pgn::engine_to_pgn;
use chess_rules_engine::{ChessRulesEngine, ClickOutcome, GameStatus};

#[derive(Parser, Debug)]
#[command(version, about = "Two-player chess in the terminal")]
struct Args {
    /// Starting position (placement field and side to move).
    #[arg(long)]
    fen: Option<String>,

    /// Tracing filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut engine = match &args.fen {
        Some(fen) => ChessRulesEngine::from_fen(fen)?,
        None => ChessRulesEngine::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", engine.render());
    print_status(&engine);

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let argument = words.next();

        match command {
            "quit" | "exit" => break,
            "help" => println!(
                "e2e4 | moves <sq> | select <sq> | undo | new | board | fen | pgn | status | quit"
            ),
            "board" => println!("{}", engine.render()),
            "fen" => println!("{}", engine.to_fen()),
            "pgn" => print!("{}", engine_to_pgn(&engine)),
            "status" => print_status(&engine),
            "new" => {
                engine.new_game();
                println!("{}", engine.render());
                print_status(&engine);
            }
            "undo" => match engine.undo_move() {
                Some(record) => {
                    println!("took back {}{}", record.from, record.to);
                    println!("{}", engine.render());
                    print_status(&engine);
                }
                None => println!("nothing to undo"),
            },
            "moves" => match argument.map(algebraic_to_square) {
                Some(Ok(square)) => {
                    let names: Vec<String> = engine
                        .legal_moves_for(square)
                        .iter()
                        .map(|s| s.to_string())
                        .collect();
                    println!("{square}: {}", names.join(" "));
                }
                Some(Err(e)) => println!("{e}"),
                None => println!("usage: moves <square>"),
            },
            "select" => match argument.map(algebraic_to_square) {
                Some(Ok(square)) => match engine.click_square(square) {
                    ClickOutcome::Ignored => println!("ignored"),
                    ClickOutcome::Deselected => println!("selection cleared"),
                    ClickOutcome::Selected { .. } => println!("{}", engine.render()),
                    ClickOutcome::Moved { .. } => {
                        println!("{}", engine.render());
                        print_status(&engine);
                    }
                },
                Some(Err(e)) => println!("{e}"),
                None => println!("usage: select <square>"),
            },
            text => match long_algebraic_to_move(text) {
                Ok(mv) => match engine.apply_move(mv.from, mv.to) {
                    Ok(_) => {
                        println!("{}", engine.render());
                        print_status(&engine);
                    }
                    Err(e) => println!("{e}"),
                },
                Err(e) => println!("{e}"),
            },
        }

        stdout.flush()?;
    }

    Ok(())
}

fn print_status(engine: &ChessRulesEngine) {
    match engine.status() {
        GameStatus::Ongoing => println!("{} to move", engine.active_color()),
        GameStatus::Check(color) => println!("{color} is in check"),
        GameStatus::Checkmate { winner } => println!("Checkmate, {winner} wins"),
        GameStatus::Stalemate => println!("Stalemate"),
    }
}
