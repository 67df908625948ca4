//! Board-placement parser.
//!
//! Reads the FEN piece-placement field and side-to-move field into a fresh
//! `GameState`. Castling, en-passant and clock fields are accepted when
//! present and ignored, since the engine has none of those rules.

use crate::chess_errors::NotationError;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;

pub fn parse_fen(fen: &str) -> Result<GameState, NotationError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| NotationError::InvalidPlacement("missing board layout".to_owned()))?;
    let side_part = parts.next().unwrap_or("w");

    if parts.count() > 4 {
        return Err(NotationError::InvalidPlacement(
            "FEN has extra trailing fields".to_owned(),
        ));
    }

    let squares = parse_board(board_part)?;
    for color in [Color::Light, Color::Dark] {
        let count = squares
            .iter()
            .flatten()
            .flatten()
            .filter(|p| p.kind == PieceKind::King && p.color == color)
            .count();
        if count != 1 {
            return Err(NotationError::KingCount {
                color: color.to_string(),
                count,
            });
        }
    }

    let position = Position::from_squares(squares).ok_or_else(|| {
        NotationError::InvalidPlacement("board must hold one king per color".to_owned())
    })?;

    // The side that just moved can never have left its own king attacked.
    let side_to_move = parse_side_to_move(side_part)?;
    let waiting = side_to_move.opposite();
    if is_king_in_check(&position, waiting) {
        return Err(NotationError::WaitingKingInCheck {
            color: waiting.to_string(),
        });
    }

    Ok(GameState::from_position(position, side_to_move))
}

type Grid = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

fn parse_board(board_part: &str) -> Result<Grid, NotationError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(NotationError::InvalidPlacement(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut squares: Grid = [[None; BOARD_SIZE]; BOARD_SIZE];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = BOARD_SIZE - 1 - fen_rank_idx;
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(NotationError::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                if col > BOARD_SIZE {
                    return Err(NotationError::InvalidPlacement(format!(
                        "rank '{rank_str}' has too many files"
                    )));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                NotationError::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;

            if col >= BOARD_SIZE {
                return Err(NotationError::InvalidPlacement(format!(
                    "rank '{rank_str}' has too many files"
                )));
            }

            squares[row][col] = Some(piece);
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(NotationError::InvalidPlacement(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(squares)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, NotationError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(NotationError::InvalidSideToMove(side_part.to_owned())),
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
