//! Uniform random move chooser.
//!
//! Picks uniformly among legal moves. Seedable, so self-play runs and
//! randomized tests are reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::MoveChooser;
use crate::game_state::chess_types::*;
use crate::rules_engine::ChessRulesEngine;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveChooser for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, engine: &ChessRulesEngine) -> Option<ChessMove> {
        engine.all_legal_moves().choose(&mut self.rng).copied()
    }
}
