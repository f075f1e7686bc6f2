//! Benchmarks for the backtracking search and the technique pipeline.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridwright_core::DigitGrid;
use gridwright_solver::{TechniqueSolver, TechniqueState, analyze, backtracking};

const EASY: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

fn puzzles() -> Vec<(&'static str, DigitGrid)> {
    vec![
        ("easy", EASY.parse().unwrap()),
        ("empty", DigitGrid::new()),
    ]
}

fn bench_backtracking_solve(c: &mut Criterion) {
    for (param, grid) in puzzles() {
        c.bench_with_input(
            BenchmarkId::new("backtracking_solve", param),
            &grid,
            |b, grid| {
                b.iter(|| hint::black_box(backtracking::solve(hint::black_box(grid))));
            },
        );
    }
}

fn bench_uniqueness_check(c: &mut Criterion) {
    let grid: DigitGrid = EASY.parse().unwrap();
    c.bench_function("is_unique", |b| {
        b.iter(|| hint::black_box(backtracking::is_unique(hint::black_box(&grid))));
    });
}

fn bench_technique_solve(c: &mut Criterion) {
    let solver = TechniqueSolver::with_all_techniques();
    let grid: DigitGrid = EASY.parse().unwrap();
    c.bench_function("technique_solve", |b| {
        b.iter_batched_ref(
            || TechniqueState::from_digit_grid(&grid),
            |state| {
                let outcome = solver.solve(state).unwrap();
                hint::black_box(outcome.solved)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_analyze(c: &mut Criterion) {
    let grid: DigitGrid = EASY.parse().unwrap();
    c.bench_function("analyze", |b| {
        b.iter(|| hint::black_box(analyze(hint::black_box(&grid))));
    });
}

criterion_group!(
    benches,
    bench_backtracking_solve,
    bench_uniqueness_check,
    bench_technique_solve,
    bench_analyze
);
criterion_main!(benches);
