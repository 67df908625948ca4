//! Long algebraic move text (`e2e4`).
//!
//! Promotion is always to a queen, so a fifth character is accepted only when
//! it is `q`, and generated text never carries one.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move(text: &str) -> Result<ChessMove, NotationError> {
    let invalid = || NotationError::InvalidMove(text.to_owned());

    if !text.is_ascii() {
        return Err(invalid());
    }
    match text.len() {
        4 => {}
        5 if text.ends_with('q') => {}
        _ => return Err(invalid()),
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    Ok(ChessMove::new(from, to))
}

#[inline]
pub fn move_to_long_algebraic(mv: ChessMove) -> String {
    mv.to_string()
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::chess_errors::NotationError;

    #[test]
    fn parses_plain_and_queen_promotion_text() {
        let mv = long_algebraic_to_move("e2e4").expect("e2e4 should parse");
        assert_eq!((mv.from.row(), mv.from.col()), (1, 4));
        assert_eq!((mv.to.row(), mv.to.col()), (3, 4));
        assert_eq!(move_to_long_algebraic(mv), "e2e4");

        let promo = long_algebraic_to_move("a7a8q").expect("queen promotion should parse");
        assert_eq!(move_to_long_algebraic(promo), "a7a8");
    }

    #[test]
    fn rejects_underpromotion_and_garbage() {
        for bad in ["a7a8n", "e2e", "e2e9", "e2-e4", "ééé"] {
            assert_eq!(
                long_algebraic_to_move(bad),
                Err(NotationError::InvalidMove(bad.to_owned()))
            );
        }
    }
}
