use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::*;

/// Forward pushes onto empty squares (double step from the start row when
/// both squares are empty) and diagonal captures onto opposing pieces.
/// No en-passant.
pub fn pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if position.piece_at(one).is_none() {
            out.push(one);

            if from.row() == pawn_start_row(color) {
                if let Some(two) = one.offset(dir, 0) {
                    if position.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(dir, d_col) else {
            continue;
        };
        if let Some(other) = position.piece_at(target) {
            if other.color != color {
                out.push(target);
            }
        }
    }
}
