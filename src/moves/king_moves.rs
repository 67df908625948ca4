use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::step;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent squares only; there is no castling.
#[inline]
pub fn king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    step(position, from, color, &KING_OFFSETS, out);
}
