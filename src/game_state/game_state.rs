//! Complete state of one game.
//!
//! `GameState` owns the position, the per-color captured lists, the undo log
//! and the turn/selection flags. One instance per game; nothing is shared
//! between instances.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub position: Position,

    /// Captured pieces keyed by the captured piece's color, oldest first.
    pub captured: [Vec<Piece>; 2],

    /// Undo log, most recent last.
    pub move_log: Vec<MoveRecord>,

    pub active_color: Color,
    pub is_active: bool,
    pub selection: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_position(Position::starting(), Color::Light)
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    /// Fresh game (empty log and captured lists) from an arbitrary position.
    pub fn from_position(position: Position, active_color: Color) -> Self {
        Self {
            position,
            captured: [Vec::new(), Vec::new()],
            move_log: Vec::new(),
            active_color,
            is_active: true,
            selection: None,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, NotationError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn captured_of(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }
}
