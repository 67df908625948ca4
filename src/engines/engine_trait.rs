//! Move-chooser abstraction for automated play.
//!
//! The rules engine itself never picks moves; a `MoveChooser` does, so
//! self-play drivers and tests can swap strategies behind one trait.

use tracing::info;

use crate::game_state::chess_types::*;
use crate::rules_engine::ChessRulesEngine;

pub trait MoveChooser {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// `None` when the side to move has no legal move.
    fn choose_move(&mut self, engine: &ChessRulesEngine) -> Option<ChessMove>;
}

/// Play until the game ends or `max_plies` moves have been made.
/// Returns the final status.
pub fn play_game<C: MoveChooser + ?Sized>(
    engine: &mut ChessRulesEngine,
    chooser: &mut C,
    max_plies: usize,
) -> GameStatus {
    chooser.new_game();

    for _ in 0..max_plies {
        if !engine.is_active() {
            break;
        }
        let Some(mv) = chooser.choose_move(engine) else {
            break;
        };
        if engine.apply_move(mv.from, mv.to).is_err() {
            break;
        }
    }

    let status = engine.status();
    info!(chooser = chooser.name(), plies = engine.move_log().len(), ?status, "self-play finished");
    status
}
