use crate::game_state::chess_types::{Piece, Square};

/// Single undo record pushed by `apply_move` and popped by `undo_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// Snapshot before the move, so a promoted queen is restored as a pawn.
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub was_king_move: bool,
}
