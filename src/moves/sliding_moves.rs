use crate::game_state::chess_types::*;

/// Walk each ray from `from` until the board edge, stopping before an own
/// piece and after the first opposing piece.
pub fn slide(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(sq) = cursor {
            match position.piece_at(sq) {
                None => out.push(sq),
                Some(other) => {
                    if other.color != color {
                        out.push(sq);
                    }
                    break;
                }
            }
            cursor = sq.offset(d_row, d_col);
        }
    }
}

/// Single-step targets (king, knight) that are on the board and not own-occupied.
pub fn step(
    position: &Position,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(sq) = from.offset(d_row, d_col) else {
            continue;
        };
        match position.piece_at(sq) {
            Some(other) if other.color == color => {}
            _ => out.push(sq),
        }
    }
}
