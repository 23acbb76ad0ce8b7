//! Prefix tables against naive summation oracles.

use gesp_solvers::domain::prefix::{PrefixGrid, PrefixSums};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_prefix_sums_match_naive() {
    let mut rng = StdRng::seed_from_u64(11);
    let values: Vec<i64> = (0..80).map(|_| rng.gen_range(-100i64..=100)).collect();
    let table = PrefixSums::build(&values);

    for l in 1..=values.len() {
        for r in l..=values.len() {
            let naive: i64 = values[l - 1..r].iter().sum();
            assert_eq!(table.range(l, r), naive, "range {}..={}", l, r);
        }
    }
}

#[test]
fn test_prefix_grid_matches_naive() {
    let mut rng = StdRng::seed_from_u64(12);
    let rows = 12;
    let cols = 9;
    let cells: Vec<Vec<i64>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(-5i64..=5)).collect())
        .collect();
    let grid = PrefixGrid::build(&cells);

    for r1 in 1..=rows {
        for c1 in 1..=cols {
            for r2 in r1..=rows {
                for c2 in c1..=cols {
                    let mut naive = 0i64;
                    for row in &cells[r1 - 1..r2] {
                        naive += row[c1 - 1..c2].iter().sum::<i64>();
                    }
                    assert_eq!(
                        grid.query(r1, c1, r2, c2),
                        naive,
                        "rect ({},{})..({},{})",
                        r1,
                        c1,
                        r2,
                        c2
                    );
                }
            }
        }
    }
}

#[test]
fn test_prefix_invariant_holds() {
    // prefix[i][j] must equal the sum of all cells with row <= i, col <= j
    let cells = vec![vec![1i64, 2, 3], vec![4, 5, 6]];
    let grid = PrefixGrid::build(&cells);

    for i in 1..=2 {
        for j in 1..=3 {
            let mut total = 0i64;
            for row in &cells[..i] {
                total += row[..j].iter().sum::<i64>();
            }
            assert_eq!(grid.query(1, 1, i, j), total);
        }
    }
}
