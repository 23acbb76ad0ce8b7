//! Binary-search-on-answer and order-statistics solvers

use crate::app::SolveError;
use crate::constants::{MAX_SEQUENCE_LEN, MAX_TIERS, MAX_VALUE};
use crate::domain::bsearch::{max_feasible, min_feasible};
use crate::domain::prefix::PrefixSums;
use crate::infra::scanner::Scanner;
use rustc_hash::FxHashSet;
use std::io::Write;

/// Maximum number of a x b flags cut from an n x m cloth.
///
/// Flags are laid in two strips: `v` flags upright and the rest rotated.
/// `feasible(v)` checks one strip assignment in O(1); cutting fewer flags
/// is always possible, so feasibility is downward-closed and the answer is
/// the largest feasible count.
pub fn banner_cut(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let (mut n, mut m): (i64, i64) = (sc.next()?, sc.next()?);
    let (mut a, mut b): (i64, i64) = (sc.next()?, sc.next()?);

    if n > m {
        std::mem::swap(&mut n, &mut m);
    }
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }

    if a == b {
        writeln!(out, "{}", n / a)?;
        return Ok(());
    }

    let feasible = |v: i64| {
        let mut x = v * a;
        let mut y = v * b;
        if y > m {
            // Rotate just enough flags to pull the long strip back within m
            // y > m and b > a here, so this matches signed div_ceil
            let t = (y - m + (b - a) - 1) / (b - a);
            y -= t * (b - a);
            x += t * (b - a);
        }
        x <= n && y <= m
    };

    // v = 0 cuts nothing and is always feasible
    let ans = max_feasible(0, n, feasible).unwrap_or(0);
    writeln!(out, "{}", ans)?;
    Ok(())
}

/// Minimum threshold v such that every value forced to relocate is at
/// most v.
///
/// A value's rightmost occurrence is the one forced to move; raising v
/// never invalidates a feasible threshold, so feasibility is upward-closed
/// and the answer is the smallest feasible v. An instance with no feasible
/// threshold in range reports the range maximum.
pub fn dedup_threshold(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    assert!(n <= MAX_SEQUENCE_LEN, "sequence too long");
    let values: Vec<i64> = sc.take(n)?;

    let feasible = |v: i64| {
        let mut seen = FxHashSet::default();
        for &x in values.iter().rev() {
            // First visit from the right is the value's last occurrence
            if seen.insert(x) && x > v {
                return false;
            }
        }
        true
    };

    let ans = min_feasible(1, MAX_VALUE, feasible).unwrap_or(MAX_VALUE);
    writeln!(out, "{}", ans)?;
    Ok(())
}

/// Minimum cost for candidate 1 to hold a strict plurality.
///
/// Offers are `(tier, cost)`; tier 1 offers are already held. For each
/// target count `aim`, every other tier is cut down below `aim` by buying
/// its cheapest offers (a prefix of the sorted costs), then the cheapest
/// leftovers top the count up to `aim`. The answer is the minimum over all
/// achievable `aim`.
pub fn tier_purchase(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    let m: usize = sc.next()?;
    assert!((1..=MAX_TIERS).contains(&n), "tier count out of bounds");

    let mut costs_by_tier: Vec<Vec<i64>> = vec![Vec::new(); n + 1];
    for _ in 0..m {
        let tier: usize = sc.next()?;
        let cost: i64 = sc.next()?;
        costs_by_tier[tier].push(cost);
    }
    for costs in &mut costs_by_tier {
        costs.sort_unstable();
    }

    let held = costs_by_tier[1].len();
    let prefixes: Vec<PrefixSums> = costs_by_tier
        .iter()
        .map(|costs| PrefixSums::build(costs))
        .collect();

    let cost_for = |aim: usize| -> i64 {
        let mut total = 0i64;
        let mut count = held;
        let mut leftovers: Vec<i64> = Vec::new();

        for (tier, costs) in costs_by_tier.iter().enumerate().skip(2) {
            // Buy the cheapest offers until the tier drops below aim
            let buy = (costs.len() + 1).saturating_sub(aim);
            total += prefixes[tier].prefix(buy);
            count += buy;
            leftovers.extend_from_slice(&costs[buy..]);
        }

        leftovers.sort_unstable();
        for &c in leftovers.iter().take(aim.saturating_sub(count)) {
            total += c;
        }
        total
    };

    let ans = (held.max(1)..=m).map(cost_for).min().unwrap_or(0);
    writeln!(out, "{}", ans)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(solver: crate::app::registry::SolverFn, input: &str) -> String {
        let mut sc = Scanner::from_str(input);
        let mut out = Vec::new();
        solver(&mut sc, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_banner_cut_square_flags() {
        // 10x10 cloth, 3x3 flags: 3 per row of the short side
        assert_eq!(run(banner_cut, "10 10\n3 3\n"), "3\n");
    }

    #[test]
    fn test_banner_cut_mixed_orientation() {
        // 6x8 cloth, 2x3 flags. v=2: x=4, y=6 fits (x<=6, y<=8).
        // v=3: x=6, y=9 > 8 -> rotate one: y=8, x=7 > 6 -> infeasible.
        assert_eq!(run(banner_cut, "6 8\n2 3\n"), "2\n");
    }

    #[test]
    fn test_banner_cut_flag_too_big() {
        assert_eq!(run(banner_cut, "2 2\n3 5\n"), "0\n");
    }

    #[test]
    fn test_dedup_threshold_forced_moves() {
        // Last occurrences of 1, 5, 9 are forced to move; minimal v is 9
        assert_eq!(run(dedup_threshold, "6\n1 5 5 5 9 9\n"), "9\n");
    }

    #[test]
    fn test_dedup_threshold_single_value() {
        assert_eq!(run(dedup_threshold, "1\n42\n"), "42\n");
    }

    #[test]
    fn test_dedup_threshold_empty_sequence() {
        // No forced moves: the smallest candidate in range wins
        assert_eq!(run(dedup_threshold, "0\n"), "1\n");
    }

    #[test]
    fn test_tier_purchase_single_offer() {
        // One offer for tier 2: buying it yields 1 vs 0, cost 5
        assert_eq!(run(tier_purchase, "2 1\n2 5\n"), "5\n");
    }

    #[test]
    fn test_tier_purchase_already_winning() {
        // Tier 1 holds 2, tier 2 holds 1: already a strict plurality
        assert_eq!(run(tier_purchase, "2 3\n1 10\n1 20\n2 7\n"), "0\n");
    }

    #[test]
    fn test_tier_purchase_cut_down_opponent() {
        // Tier 2 has three cheap offers; either buy two of them (aim 2,
        // cost 1+2=3) or reach aim 3 some other way. Expected 3.
        assert_eq!(run(tier_purchase, "2 3\n2 1\n2 2\n2 4\n"), "3\n");
    }
}
