use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::slide;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(position, from, color, &BISHOP_DIRECTIONS, out);
}
