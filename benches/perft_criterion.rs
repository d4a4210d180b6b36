use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::move_generation::perft::perft;
use chess_rules::utils::algebraic::algebraic_to_position;
use chess_rules::{create_new_game, make_move, GameState};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    opening: &'static [(&'static str, &'static str)],
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[BenchCase {
    name: "startpos",
    opening: &[],
    expected_nodes: &[20, 400, 8902],
}];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        opening: &[],
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "after_e4",
        opening: &[("e2", "e4")],
        expected_nodes: &[20],
    },
];

fn selected_cases() -> (&'static str, &'static [BenchCase]) {
    match std::env::var("CHESS_RULES_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => ("standard", CASES_STANDARD),
        _ => ("quick", CASES_QUICK),
    }
}

fn play_opening(case: &BenchCase) -> GameState {
    case.opening.iter().fold(create_new_game(), |game, (from, to)| {
        let from = algebraic_to_position(from).expect("benchmark square should parse");
        let to = algebraic_to_position(to).expect("benchmark square should parse");
        make_move(&game, from, to, None).expect("benchmark opening move should be legal")
    })
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = selected_cases();

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        let game = play_opening(case);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
