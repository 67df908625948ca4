//! Errors used throughout the rules engine.
//!
//! `ChessError` is the only error type returned by engine operations and has
//! exactly two kinds: an illegal move request and an off-board coordinate.
//! Everything else a game can run into (no destinations, check, checkmate,
//! stalemate) is ordinary state, reported through return values.
//!
//! `NotationError` covers the text utilities (squares, move strings, board
//! placement, PGN) and `ReplayError` joins both when a move list is replayed.
//! `PerftError` reports a failed perft worker thread.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// `from -> to` is not a legal move for the side to move.
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// Caller coordinates outside the 8x8 grid.
    #[error("Square ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: i8, col: i8 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("Invalid long algebraic move: {0}")]
    InvalidMove(String),

    #[error("Invalid board placement: {0}")]
    InvalidPlacement(String),

    #[error("Invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("Expected exactly one {color} king, found {count}")]
    KingCount { color: String, count: usize },

    /// The side that is not to move is already attacked.
    #[error("{color} is not to move but its king is in check")]
    WaitingKingInCheck { color: String },

    #[error("Invalid PGN: {0}")]
    InvalidPgn(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PerftError {
    #[error("perft worker thread panicked")]
    WorkerPanicked,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Rules(#[from] ChessError),
}

pub type ChessResult<T> = Result<T, ChessError>;
