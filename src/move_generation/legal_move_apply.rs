//! Reversible move application on a `GameState`.
//!
//! `make_move` performs no legality checks; callers validate first. Every
//! side effect it has is recorded in the returned `MoveRecord`, and
//! `unmake_move` consumes the newest record to invert exactly those effects.

use crate::game_state::chess_types::*;

pub fn make_move(game_state: &mut GameState, from: Square, to: Square) -> Option<MoveRecord> {
    let moved_piece = game_state.position.piece_at(from)?;
    let captured_piece = game_state.position.relocate(from, to);

    if let Some(captured) = captured_piece {
        game_state.captured[captured.color.index()].push(captured);
    }

    let record = MoveRecord {
        from,
        to,
        moved_piece,
        captured_piece,
        was_king_move: moved_piece.kind == PieceKind::King,
    };
    game_state.move_log.push(record);
    game_state.active_color = moved_piece.color.opposite();

    Some(record)
}

/// Pop and invert the newest record. `None` when the log is empty.
pub fn unmake_move(game_state: &mut GameState) -> Option<MoveRecord> {
    let record = game_state.move_log.pop()?;

    game_state.position.restore(&record);

    if let Some(captured) = record.captured_piece {
        let list = &mut game_state.captured[captured.color.index()];
        if let Some(idx) = list.iter().rposition(|p| p.kind == captured.kind) {
            list.remove(idx);
        }
    }

    game_state.active_color = record.moved_piece.color;

    Some(record)
}
