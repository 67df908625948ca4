//! Check detection over raw pseudo-legal moves.
//!
//! Uses the unfiltered generators only, so it can be called from inside the
//! king-safety filter without recursing back into legality.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_pseudo_legal;

/// True if some piece of `attacker_color` has `square` among its
/// pseudo-legal destinations.
pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    let mut scratch = Vec::with_capacity(28);
    for (from, _) in position.occupied_by(attacker_color) {
        scratch.clear();
        generate_pseudo_legal(position, from, &mut scratch);
        if scratch.contains(&square) {
            return true;
        }
    }
    false
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    is_square_attacked(position, position.king_square(color), color.opposite())
}

/// Squares of `attacker_color` pieces currently attacking `square`.
pub fn attackers_to_square(position: &Position, square: Square, attacker_color: Color) -> Vec<Square> {
    let mut scratch = Vec::with_capacity(28);
    let mut attackers = Vec::new();
    for (from, _) in position.occupied_by(attacker_color) {
        scratch.clear();
        generate_pseudo_legal(position, from, &mut scratch);
        if scratch.contains(&square) {
            attackers.push(from);
        }
    }
    attackers
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_king_in_check};
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn neither_side_is_in_check_at_start() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(&game.position, Color::Light));
        assert!(!is_king_in_check(&game.position, Color::Dark));
    }

    #[test]
    fn pawn_checks_diagonally_but_not_straight_ahead() {
        let diagonal = parse_fen("8/8/8/8/8/3k4/4P3/4K3 b").expect("fen should parse");
        assert!(is_king_in_check(&diagonal.position, Color::Dark));

        let ahead = parse_fen("8/8/8/8/8/4k3/4P3/4K3 b").expect("fen should parse");
        assert!(!is_king_in_check(&ahead.position, Color::Dark));
    }

    #[test]
    fn blocked_slider_does_not_give_check() {
        let open = parse_fen("4k3/8/8/8/8/8/8/4R1K1 b").expect("fen should parse");
        assert!(is_king_in_check(&open.position, Color::Dark));

        let blocked = parse_fen("4k3/4n3/8/8/8/8/8/4R1K1 b").expect("fen should parse");
        assert!(!is_king_in_check(&blocked.position, Color::Dark));
    }

    #[test]
    fn double_check_lists_both_attackers() {
        let game = parse_fen("4k3/8/3N4/8/8/8/8/4R1K1 b").expect("fen should parse");
        let king = algebraic_to_square("e8").expect("e8 should parse");
        let attackers = attackers_to_square(&game.position, king, Color::Light);
        assert_eq!(attackers.len(), 2);
    }
}
