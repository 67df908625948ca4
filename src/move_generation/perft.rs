//! Perft node counting over the legal move generator.
//!
//! Walks the game tree with make/unmake on a single `GameState` and tallies
//! leaf statistics. Used as a correctness oracle in tests and benches.

use std::thread::{self, JoinHandle};

use crate::chess_errors::PerftError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_any_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    perft_recurse(&mut scratch, depth, &mut total);
    total
}

/// Same totals as [`perft`], one thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> Result<PerftCounts, PerftError> {
    if depth <= 1 {
        return Ok(perft(game_state, depth));
    }

    let root_moves = generate_legal_moves(&game_state.position, game_state.active_color);
    let handles: Vec<_> = root_moves
        .into_iter()
        .map(|mv| {
            let mut local_state = game_state.clone();
            thread::spawn(move || {
                let mut local = PerftCounts::default();
                if make_move(&mut local_state, mv.from, mv.to).is_some() {
                    perft_recurse(&mut local_state, depth - 1, &mut local);
                }
                local
            })
        })
        .collect();

    join_workers(handles)
}

fn join_workers(handles: Vec<JoinHandle<PerftCounts>>) -> Result<PerftCounts, PerftError> {
    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle.join().map_err(|_| PerftError::WorkerPanicked)?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    if depth == 0 {
        tally_leaf(game_state, counts);
        return;
    }

    let moves = generate_legal_moves(&game_state.position, game_state.active_color);
    for mv in moves {
        if make_move(game_state, mv.from, mv.to).is_none() {
            continue;
        }
        perft_recurse(game_state, depth - 1, counts);
        unmake_move(game_state);
    }
}

fn tally_leaf(game_state: &GameState, counts: &mut PerftCounts) {
    counts.nodes += 1;

    let Some(last) = game_state.move_log.last() else {
        return;
    };
    if last.captured_piece.is_some() {
        counts.captures += 1;
    }
    if last.moved_piece.kind == PieceKind::Pawn
        && game_state.position.piece_at(last.to).map(|p| p.kind) == Some(PieceKind::Queen)
    {
        counts.promotions += 1;
    }

    let side = game_state.active_color;
    if is_king_in_check(&game_state.position, side) {
        counts.checks += 1;
        if !has_any_legal_move(&game_state.position, side) {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{join_workers, perft, perft_multi_threaded, PerftCounts};
    use crate::chess_errors::PerftError;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        assert_eq!(
            perft(&game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_matches_reference_counts_from_start() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth_three = perft(&game, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);
    }

    #[test]
    fn perft_leaves_the_input_untouched_and_threads_agree() {
        let game = GameState::new_game();
        let single = perft(&game, 2);
        let multi = perft_multi_threaded(&game, 2).expect("workers should finish");
        assert_eq!(single, multi);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn panicked_worker_fails_the_whole_count() {
        let healthy = thread::spawn(|| PerftCounts {
            nodes: 20,
            ..PerftCounts::default()
        });
        let broken = thread::spawn(|| -> PerftCounts { panic!("generator bug") });

        assert_eq!(
            join_workers(vec![healthy, broken]),
            Err(PerftError::WorkerPanicked)
        );
    }

    #[test]
    fn promotions_count_once_per_pawn_move() {
        // No underpromotion: each promoting push is a single node.
        let game = parse_fen("4k3/P7/8/8/8/8/8/4K3 w").expect("fen should parse");
        let counts = perft(&game, 1);
        assert_eq!(counts.promotions, 1);
        // a8=Q plus five king moves (d1, d2, e2, f2, f1).
        assert_eq!(counts.nodes, 6);
    }
}
