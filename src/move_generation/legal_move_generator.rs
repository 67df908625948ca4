//! Legal move generation.
//!
//! Takes the pseudo-legal destinations of a piece and drops every one that
//! would leave the mover's own king attacked. Each candidate is probed on a
//! copied `Position` (board plus king squares) so the real state is never
//! touched.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::pseudo_legal_moves;

/// Would moving `from -> to` leave `color`'s king attacked?
#[inline]
pub fn leaves_king_in_check(position: &Position, from: Square, to: Square, color: Color) -> bool {
    let mut probe = *position;
    probe.relocate(from, to);
    is_king_in_check(&probe, color)
}

/// Legal destinations for the piece on `from`, regardless of whose turn it
/// is. Empty for an empty square.
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    let Some(piece) = position.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = pseudo_legal_moves(position, from);
    moves.retain(|to| !leaves_king_in_check(position, from, *to, piece.color));
    moves
}

/// Every legal move for `color`, in board-scan order.
pub fn generate_legal_moves(position: &Position, color: Color) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in position.occupied_by(color) {
        out.extend(
            legal_destinations(position, from)
                .into_iter()
                .map(|to| ChessMove::new(from, to)),
        );
    }
    out
}

pub fn has_any_legal_move(position: &Position, color: Color) -> bool {
    position
        .occupied_by(color)
        .any(|(from, _)| !legal_destinations(position, from).is_empty())
}

/// Classify the situation of `color`, assumed to be the side to move.
pub fn classify_status(position: &Position, color: Color) -> GameStatus {
    let in_check = is_king_in_check(position, color);
    let can_move = has_any_legal_move(position, color);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: color.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(color),
        (false, true) => GameStatus::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_status, generate_legal_moves, has_any_legal_move, legal_destinations};
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn twenty_legal_moves_at_start() {
        let game = GameState::new_game();
        assert_eq!(generate_legal_moves(&game.position, Color::Light).len(), 20);
        assert_eq!(generate_legal_moves(&game.position, Color::Dark).len(), 20);
    }

    #[test]
    fn pinned_piece_may_only_move_along_the_pin() {
        // Rook e4 pinned by the black rook e8 against the king e1.
        let game = parse_fen("k3r3/8/8/8/4R3/8/8/4K3 w").expect("fen should parse");
        let mut moves = legal_destinations(&game.position, sq("e4"));
        moves.sort();
        let names: Vec<String> = moves.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["e2", "e3", "e5", "e6", "e7", "e8"]);
    }

    #[test]
    fn king_cannot_step_into_attack_or_capture_a_defended_piece() {
        let game = parse_fen("8/8/8/8/8/3k4/4q3/4K3 w").expect("fen should parse");
        // Queen e2 is defended by the king d3; everything around e1 is covered.
        assert!(legal_destinations(&game.position, sq("e1")).is_empty());
        assert!(!has_any_legal_move(&game.position, Color::Light));
        assert_eq!(
            classify_status(&game.position, Color::Light),
            GameStatus::Checkmate {
                winner: Color::Dark
            }
        );
    }

    #[test]
    fn in_check_moves_must_resolve_the_check() {
        // Rook e8 checks the king e1. A knight that cannot reach the e-file
        // has no legal move at all.
        let game = parse_fen("k3r3/8/8/8/8/8/8/4K2N w").expect("fen should parse");
        assert!(legal_destinations(&game.position, sq("h1")).is_empty());

        let blocker = parse_fen("k3r3/8/8/8/8/8/6N1/4K3 w").expect("fen should parse");
        let knight = legal_destinations(&blocker.position, sq("g2"));
        assert_eq!(knight, vec![sq("e3")]);
        assert_eq!(
            classify_status(&blocker.position, Color::Light),
            GameStatus::Check(Color::Light)
        );
    }
}
