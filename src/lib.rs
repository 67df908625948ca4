//! Crate root module declarations for the chess rules engine.
//!
//! Exposes the game-state model, per-piece movement, legal move generation,
//! the public `ChessRulesEngine`, automated move choosers and notation
//! utilities so binaries, benches and embedding UIs share stable paths.

pub mod chess_errors;
pub mod rules_engine;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, NotationError, PerftError, ReplayError};
pub use game_state::chess_types::{
    ChessMove, Color, GameStatus, MoveRecord, Piece, PieceKind, Position, Square,
};
pub use rules_engine::{ChessRulesEngine, ClickOutcome};
