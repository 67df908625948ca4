//! Pseudo-legal destination dispatch.
//!
//! Routes a square to the generator for the piece standing on it. The result
//! honours movement geometry and occupancy but ignores king safety; check
//! detection relies on that to stay non-recursive.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Append the pseudo-legal destinations of the piece on `from` to `out`.
/// An empty square adds nothing.
pub fn generate_pseudo_legal(position: &Position, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = position.piece_at(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(position, from, piece.color, out),
        PieceKind::Knight => knight_moves(position, from, piece.color, out),
        PieceKind::Bishop => bishop_moves(position, from, piece.color, out),
        PieceKind::Rook => rook_moves(position, from, piece.color, out),
        PieceKind::Queen => queen_moves(position, from, piece.color, out),
        PieceKind::King => king_moves(position, from, piece.color, out),
    }
}

#[inline]
pub fn pseudo_legal_moves(position: &Position, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_pseudo_legal(position, from, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn sorted_names(mut squares: Vec<Square>) -> Vec<String> {
        squares.sort();
        squares.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rook_ray_stops_after_first_capture_and_before_own_piece() {
        // Rook d4, black pawn d6 screens the black rook on d8,
        // own pawn f4 blocks the east ray.
        let game = parse_fen("k2r4/8/3p4/8/3R1P2/8/8/K7 w").expect("fen should parse");
        let moves = pseudo_legal_moves(&game.position, sq("d4"));

        assert!(moves.contains(&sq("d6")));
        assert!(!moves.contains(&sq("d7")));
        assert!(!moves.contains(&sq("d8")));
        assert!(moves.contains(&sq("e4")));
        assert!(!moves.contains(&sq("f4")));
        assert!(!moves.contains(&sq("g4")));
        assert_eq!(
            sorted_names(moves),
            vec!["d1", "d2", "d3", "a4", "b4", "c4", "e4", "d5", "d6"]
        );
    }

    #[test]
    fn bishop_never_jumps_occupied_squares() {
        let game = parse_fen("k7/8/8/8/8/2p5/1B6/K7 w").expect("fen should parse");
        let moves = pseudo_legal_moves(&game.position, sq("b2"));
        assert_eq!(sorted_names(moves), vec!["c1", "a3", "c3"]);
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop_rays() {
        let game = parse_fen("k7/8/8/8/8/8/8/K6Q b").expect("fen should parse");
        let moves = pseudo_legal_moves(&game.position, sq("h1"));
        // 7 up the file, 6 along the rank (a1 holds own king), 6 up the diagonal
        // before the black king on a8 which is captured as the 7th.
        assert_eq!(moves.len(), 7 + 6 + 7);
        assert!(moves.contains(&sq("a8")));
        assert!(!moves.contains(&sq("a1")));
    }

    #[test]
    fn pawn_pushes_double_steps_and_captures_diagonally_only() {
        let game = parse_fen("k7/8/8/8/8/3p1p2/4P3/K7 w").expect("fen should parse");
        let moves = pseudo_legal_moves(&game.position, sq("e2"));
        assert_eq!(sorted_names(moves), vec!["d3", "e3", "f3", "e4"]);

        let blocked = parse_fen("k7/8/8/8/8/4n3/4P3/K7 w").expect("fen should parse");
        assert!(pseudo_legal_moves(&blocked.position, sq("e2")).is_empty());

        let dark = parse_fen("k7/4p3/8/8/8/8/8/K7 b").expect("fen should parse");
        let moves = pseudo_legal_moves(&dark.position, sq("e7"));
        assert_eq!(sorted_names(moves), vec!["e5", "e6"]);
    }

    #[test]
    fn knight_and_king_stay_on_board_and_skip_own_pieces() {
        let game = parse_fen("k7/8/8/8/8/8/1P6/NK6 w").expect("fen should parse");
        assert_eq!(sorted_names(pseudo_legal_moves(&game.position, sq("a1"))), vec!["c2", "b3"]);
        assert_eq!(
            sorted_names(pseudo_legal_moves(&game.position, sq("b1"))),
            vec!["c1", "a2", "c2"]
        );
        assert!(pseudo_legal_moves(&game.position, sq("e4")).is_empty());
    }
}
