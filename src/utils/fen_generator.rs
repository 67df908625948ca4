//! Board-placement generator, the inverse of `fen_parser`.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

/// Placement field plus side to move, e.g. `8/8/8/8/8/8/4P3/4K2k w`.
pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::with_capacity(72);

    for row in (0..BOARD_SIZE).rev() {
        let mut empty = 0u8;
        for col in 0..BOARD_SIZE {
            match game_state.position.piece_at(Square::at(row, col)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if row > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game_state.active_color {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => ch.to_ascii_uppercase(),
        Color::Dark => ch,
    }
}
