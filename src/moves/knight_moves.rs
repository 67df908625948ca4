use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::step;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

#[inline]
pub fn knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    step(position, from, color, &KNIGHT_OFFSETS, out);
}
