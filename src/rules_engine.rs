//! Public rules engine.
//!
//! `ChessRulesEngine` owns one `GameState` and is the only API a UI layer
//! needs: ask for destinations, validate and apply moves, undo, and query
//! check, checkmate and stalemate. It also carries the click-driven selection
//! flow of a two-player board (select a piece, click a destination).
//!
//! All operations are synchronous and bounded by the board size. Several
//! games simply mean several engines.

use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult, NotationError};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    classify_status, generate_legal_moves, has_any_legal_move, legal_destinations,
};
use crate::utils::render_game_state::{render_game_state, render_with_marks};

/// Result of a board click fed to [`ChessRulesEngine::click_square`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Game over, or a click on a square that is neither an own piece nor a
    /// legal destination while nothing was selected.
    Ignored,
    /// An own piece is now selected; `destinations` are its legal targets.
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
    /// The previous selection was dropped.
    Deselected,
    /// The selected piece moved.
    Moved { record: MoveRecord, status: GameStatus },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChessRulesEngine {
    state: GameState,
}

impl ChessRulesEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a placement string (see `utils::fen_parser`).
    pub fn from_fen(fen: &str) -> Result<Self, NotationError> {
        Ok(Self::from_game_state(GameState::from_fen(fen)?))
    }

    /// Adopt an existing state; `is_active` is recomputed from the position.
    pub fn from_game_state(mut state: GameState) -> Self {
        state.is_active = !classify_status(&state.position, state.active_color).is_terminal();
        Self { state }
    }

    /// Reset to the standard starting arrangement: captured lists and move
    /// log emptied, White to move.
    pub fn new_game(&mut self) -> &Position {
        self.state = GameState::new_game();
        info!("new game started");
        &self.state.position
    }

    /// Legal destinations of the piece on `square`. Empty when the square is
    /// empty, holds an opposing piece, or the piece has nowhere to go.
    pub fn legal_moves_for(&self, square: Square) -> Vec<Square> {
        match self.state.position.piece_at(square) {
            Some(piece) if piece.color == self.state.active_color => {
                legal_destinations(&self.state.position, square)
            }
            _ => Vec::new(),
        }
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        let active = self.state.active_color;
        match self.state.position.piece_at(from) {
            Some(piece) if piece.color == active => {}
            _ => return false,
        }
        if matches!(self.state.position.piece_at(to), Some(target) if target.color == active) {
            return false;
        }
        legal_destinations(&self.state.position, from).contains(&to)
    }

    /// Validate and play `from -> to`. On error nothing changes.
    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessResult<MoveRecord> {
        if !self.is_legal_move(from, to) {
            debug!(%from, %to, color = %self.state.active_color, "rejected illegal move");
            return Err(ChessError::IllegalMove { from, to });
        }

        let record =
            make_move(&mut self.state, from, to).ok_or(ChessError::IllegalMove { from, to })?;
        self.state.selection = None;

        let status = self.status();
        debug!(%from, %to, piece = ?record.moved_piece.kind, captured = ?record.captured_piece, ?status, "applied move");

        if status.is_terminal() {
            self.state.is_active = false;
            info!(?status, moves = self.state.move_log.len(), "game over");
        }

        Ok(record)
    }

    /// Revert the newest move. A no-op returning `None` on an empty log.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let record = unmake_move(&mut self.state)?;
        self.state.selection = None;
        self.state.is_active = true;
        debug!(from = %record.from, to = %record.to, "undid move");
        Some(record)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.state.position, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    #[inline]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        has_any_legal_move(&self.state.position, color)
    }

    /// Every legal move of the side to move.
    pub fn all_legal_moves(&self) -> Vec<ChessMove> {
        generate_legal_moves(&self.state.position, self.state.active_color)
    }

    /// Situation of the side to move.
    #[inline]
    pub fn status(&self) -> GameStatus {
        classify_status(&self.state.position, self.state.active_color)
    }

    /// Drive the select-then-move interaction of a two-player board.
    pub fn click_square(&mut self, square: Square) -> ClickOutcome {
        if !self.state.is_active {
            return ClickOutcome::Ignored;
        }

        let owns_piece = matches!(
            self.state.position.piece_at(square),
            Some(piece) if piece.color == self.state.active_color
        );

        let selection = self.state.selection;
        match selection {
            Some(selected) if self.is_legal_move(selected, square) => {
                match self.apply_move(selected, square) {
                    Ok(record) => ClickOutcome::Moved {
                        record,
                        status: self.status(),
                    },
                    Err(_) => {
                        self.state.selection = None;
                        ClickOutcome::Deselected
                    }
                }
            }
            _ if owns_piece => {
                self.state.selection = Some(square);
                ClickOutcome::Selected {
                    square,
                    destinations: legal_destinations(&self.state.position, square),
                }
            }
            Some(_) => {
                self.state.selection = None;
                ClickOutcome::Deselected
            }
            None => ClickOutcome::Ignored,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.state.position.piece_at(square)
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.state.active_color
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.state.selection
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.state.position.king_square(color)
    }

    /// Pieces of `color` that have been captured, oldest first.
    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        self.state.captured_of(color)
    }

    #[inline]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.state.move_log
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.state.position
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        self.state.get_fen()
    }

    /// Unicode board, with the current selection's destinations marked.
    pub fn render(&self) -> String {
        match self.state.selection {
            Some(selected) => {
                render_with_marks(&self.state, &legal_destinations(&self.state.position, selected))
            }
            None => render_game_state(&self.state),
        }
    }
}
