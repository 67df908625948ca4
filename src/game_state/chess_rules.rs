//! Canonical chess-rule constants.
//!
//! Board dimensions, home and promotion ranks, and the standard starting
//! arrangement in piece-placement notation.

use crate::game_state::chess_types::{Color, PieceKind};

pub const BOARD_SIZE: usize = 8;

/// Standard starting position: placement field plus side to move.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Back-rank order from column 0 to column 7.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn home_row(color: Color) -> usize {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Row a pawn may double-step from.
#[inline]
pub const fn pawn_start_row(color: Color) -> usize {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// Farthest rank; a pawn arriving here becomes a queen.
#[inline]
pub const fn promotion_row(color: Color) -> usize {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}
