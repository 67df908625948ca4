//! Board occupancy plus cached king squares.
//!
//! `Position` is `Copy` (64 optional pieces and two squares), which makes it
//! the scratch snapshot for king-safety probing: copy, relocate one piece,
//! ask whether the mover is in check, drop the copy.

use crate::game_state::chess_rules::{
    home_row, pawn_start_row, promotion_row, BACK_RANK, BOARD_SIZE,
};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    king_squares: [Square; 2],
}

impl Position {
    /// Standard starting arrangement.
    pub fn starting() -> Self {
        let mut squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        for color in [Color::Light, Color::Dark] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                squares[home_row(color)][col] = Some(Piece::new(*kind, color));
                squares[pawn_start_row(color)][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        Self {
            squares,
            king_squares: [Square::at(0, 4), Square::at(7, 4)],
        }
    }

    /// Build from a full grid. Returns `None` unless each color has exactly
    /// one king.
    pub fn from_squares(squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE]) -> Option<Self> {
        let mut kings: [Option<Square>; 2] = [None, None];
        for sq in Square::all() {
            if let Some(piece) = squares[sq.row()][sq.col()] {
                if piece.kind == PieceKind::King {
                    if kings[piece.color.index()].is_some() {
                        return None;
                    }
                    kings[piece.color.index()] = Some(sq);
                }
            }
        }

        Some(Self {
            squares,
            king_squares: [kings[0]?, kings[1]?],
        })
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Squares occupied by `color`, row-major.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[inline]
    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row()][square.col()] = piece;
    }

    /// Move whatever stands on `from` to `to`, promoting pawns that reach the
    /// farthest rank and keeping king squares in sync. Returns the previous
    /// occupant of `to`. No legality checks.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.piece_at(to);
        let Some(moving) = self.piece_at(from) else {
            return captured;
        };

        let placed = if moving.kind == PieceKind::Pawn && to.row() == promotion_row(moving.color) {
            Piece::new(PieceKind::Queen, moving.color)
        } else {
            moving
        };

        self.set(to, Some(placed));
        self.set(from, None);

        if moving.kind == PieceKind::King {
            self.king_squares[moving.color.index()] = to;
        }

        captured
    }

    /// Exact inverse of the [`relocate`](Self::relocate) call that produced
    /// `record`.
    pub fn restore(&mut self, record: &MoveRecord) {
        self.set(record.from, Some(record.moved_piece));
        self.set(record.to, record.captured_piece);
        if record.was_king_move {
            self.king_squares[record.moved_piece.color.index()] = record.from;
        }
    }

    /// Count of pieces matching `kind` and `color`.
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.occupied_by(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}
