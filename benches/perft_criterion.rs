use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules_engine::game_state::chess_types::GameState;
use chess_rules_engine::move_generation::perft::perft;
use chess_rules_engine::ChessRulesEngine;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [usize],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

const CASES_QUICK: &[BenchCase] = &[BenchCase {
    name: "startpos",
    fen: STARTPOS_FEN,
    expected_nodes: &[20, 400, 8902],
}];

const CASES_STANDARD: &[BenchCase] = &[BenchCase {
    name: "startpos",
    fen: STARTPOS_FEN,
    expected_nodes: &[20, 400, 8902, 197_281],
}];

fn suite_is_standard() -> bool {
    matches!(std::env::var("RULES_BENCH_SUITE"), Ok(value) if value.eq_ignore_ascii_case("standard"))
}

fn selected_cases() -> &'static [BenchCase] {
    if suite_is_standard() {
        CASES_STANDARD
    } else {
        CASES_QUICK
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = if suite_is_standard() { "standard" } else { "quick" };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in selected_cases() {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth);
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&game), black_box(depth));
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    let positions = [
        ("startpos", STARTPOS_FEN),
        ("middlegame", "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w"),
        ("back_rank_mate", "3q2k1/8/8/8/8/8/5PPP/4r1K1 w"),
    ];

    for (name, fen) in positions {
        let engine = ChessRulesEngine::from_fen(fen).expect("benchmark FEN should parse");
        group.bench_function(name, |b| {
            b.iter(|| black_box(engine.all_legal_moves().len()));
        });
        group.bench_function(format!("{name}_status"), |b| {
            b.iter(|| black_box(engine.status()));
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_legal_moves);
criterion_main!(perft_benches);
