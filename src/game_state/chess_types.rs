//! Core value types shared by every subsystem of the rules engine.
//!
//! Colors, piece kinds, validated board squares and caller-level move pairs
//! live here so that move generation, notation utilities and the public
//! engine API all speak the same vocabulary.

use std::fmt;

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::BOARD_SIZE;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::position::Position;
pub use crate::game_state::undo_state::MoveRecord;

/// Side owning a piece. `Light` is white, `Dark` is black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "White"),
            Color::Dark => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A piece record: what it is and who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Board coordinate. Row 0 is White's home rank, row 7 Black's.
///
/// A `Square` is always inside the 8x8 grid: caller input goes through
/// [`Square::new`], internal stepping goes through [`Square::offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Validate caller-supplied coordinates.
    pub fn new(row: i8, col: i8) -> Result<Self, ChessError> {
        if Self::in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::OutOfBounds { row, col })
        }
    }

    /// Coordinates known to be on the board (tables, loops over `0..8`).
    #[inline]
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    #[inline]
    pub const fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
    }

    /// Step by `(d_row, d_col)`; `None` once the step leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if Self::in_bounds(row, col) {
            Some(Self::at(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Every square, row-major from `(0, 0)`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.col),
            char::from(b'1' + self.row)
        )
    }
}

/// Caller-level move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Situation of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    /// PGN result token.
    pub const fn result_token(self) -> &'static str {
        match self {
            GameStatus::Checkmate {
                winner: Color::Light,
            } => "1-0",
            GameStatus::Checkmate {
                winner: Color::Dark,
            } => "0-1",
            GameStatus::Stalemate => "1/2-1/2",
            GameStatus::Ongoing | GameStatus::Check(_) => "*",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Square};
    use crate::chess_errors::ChessError;

    #[test]
    fn square_constructor_rejects_off_board_coordinates() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(ChessError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            Square::new(3, -1),
            Err(ChessError::OutOfBounds { row: 3, col: -1 })
        );
    }

    #[test]
    fn offset_stops_at_board_edge() {
        let corner = Square::new(7, 7).expect("h8 is on the board");
        assert_eq!(corner.offset(1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(
            corner.offset(-1, -1),
            Some(Square::new(6, 6).expect("g7 is on the board"))
        );
    }

    #[test]
    fn display_uses_algebraic_coordinates() {
        let e2 = Square::new(1, 4).expect("e2 is on the board");
        assert_eq!(e2.to_string(), "e2");
        assert_eq!(Color::Dark.opposite(), Color::Light);
        assert_eq!(Square::all().count(), 64);
    }
}
