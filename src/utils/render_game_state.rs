//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the CLI, tests and diagnostics.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

/// Render the board to a Unicode string, White's home rank at the bottom.
pub fn render_game_state(game_state: &GameState) -> String {
    render_with_marks(game_state, &[])
}

/// Same as [`render_game_state`], drawing `marks` (e.g. highlighted
/// destinations) as `•` on empty squares and `×` on occupied ones.
pub fn render_with_marks(game_state: &GameState, marks: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..BOARD_SIZE).rev() {
        let rank = char::from(b'1' + row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let sq = Square::at(row, col);
            let marked = marks.contains(&sq);
            let glyph = match (game_state.position.piece_at(sq), marked) {
                (Some(_), true) => '×',
                (Some(piece), false) => piece_to_unicode(piece),
                (None, true) => '•',
                (None, false) => '·',
            };
            out.push(glyph);

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_game_state, render_with_marks};
    use crate::game_state::chess_types::*;

    #[test]
    fn start_board_renders_back_ranks_top_and_bottom() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
    }

    #[test]
    fn marks_are_drawn_over_empty_squares() {
        let e4 = Square::new(3, 4).expect("e4 is on the board");
        let text = render_with_marks(&GameState::new_game(), &[e4]);
        assert!(text.contains("4 · · · · • · · · 4"));
    }
}
