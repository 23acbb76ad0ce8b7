//! Solver building-block benchmarks (reduced set)
//!
//! Sized to finish within a minute locally or in CI.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gesp_solvers::domain::bsearch::max_feasible;
use gesp_solvers::domain::prefix::PrefixGrid;
use gesp_solvers::domain::sieve::LinearSieve;

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(15)
        .measurement_time(Duration::from_secs(8))
}

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    group.bench_function("linear_1e6", |b| {
        b.iter(|| LinearSieve::new(black_box(1_000_000)))
    });

    group.finish();
}

fn bench_bsearch(c: &mut Criterion) {
    let mut group = c.benchmark_group("bsearch");

    group.bench_function("max_feasible_1e18", |b| {
        b.iter(|| max_feasible(0, black_box(1_000_000_000_000_000_000), |v| v <= 987_654_321))
    });

    group.finish();
}

fn bench_prefix_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_grid");

    let cells: Vec<Vec<i64>> = (0..100)
        .map(|i| (0..100).map(|j| ((i * 31 + j * 17) % 7) as i64).collect())
        .collect();

    group.bench_function("build_100x100", |b| b.iter(|| PrefixGrid::build(black_box(&cells))));

    let grid = PrefixGrid::build(&cells);
    group.bench_function("query_all_rects_20x20", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for r1 in 1..=20 {
                for c1 in 1..=20 {
                    for r2 in r1..=20 {
                        for c2 in c1..=20 {
                            acc += grid.query(r1, c1, r2, c2);
                        }
                    }
                }
            }
            black_box(acc)
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_sieve, bench_bsearch, bench_prefix_grid
}
criterion_main!(benches);
