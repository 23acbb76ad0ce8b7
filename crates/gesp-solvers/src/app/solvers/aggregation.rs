//! Sorting, ranking, greedy, and offline-aggregation solvers

use crate::app::SolveError;
use crate::constants::MAX_GRID_SIDE;
use crate::domain::modular::gcd;
use crate::domain::prefix::PrefixGrid;
use crate::domain::ranking::competition_ranks;
use crate::infra::scanner::Scanner;
use std::io::Write;

/// Rank students by (c+m+e, c+m, max(c, m)) descending with competition
/// ranking. Prints each student's rank in input order.
pub fn score_ranking(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;

    let mut keys = Vec::with_capacity(n);
    for _ in 0..n {
        let c: i64 = sc.next()?;
        let m: i64 = sc.next()?;
        let e: i64 = sc.next()?;
        keys.push((c + m + e, c + m, c.max(m)));
    }

    for rank in competition_ranks(&keys) {
        writeln!(out, "{}", rank)?;
    }
    Ok(())
}

/// Smallest area of a sub-rectangle containing at least k marked cells,
/// or 0 when no rectangle qualifies. Rows arrive as strings of 0/1 digits.
pub fn min_stain_area(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    let m: usize = sc.next()?;
    let k: i64 = sc.next()?;
    assert!(n <= MAX_GRID_SIDE && m <= MAX_GRID_SIDE, "grid too large");

    let mut cells = Vec::with_capacity(n);
    for _ in 0..n {
        let row = sc.token()?;
        cells.push(
            row.bytes()
                .map(|b| i64::from(b - b'0'))
                .collect::<Vec<i64>>(),
        );
    }
    let grid = PrefixGrid::build(&cells);

    let mut ans: i64 = 0;
    for r1 in 1..=n {
        for r2 in r1..=n {
            for c1 in 1..=m {
                for c2 in c1..=m {
                    if grid.query(r1, c1, r2, c2) >= k {
                        let area = ((r2 - r1 + 1) * (c2 - c1 + 1)) as i64;
                        ans = if ans == 0 { area } else { ans.min(area) };
                    }
                }
            }
        }
    }

    writeln!(out, "{}", ans)?;
    Ok(())
}

/// Schedule unit-time games into slots before their deadlines for maximum
/// total reward. Highest-reward games claim the latest free slot first.
pub fn deadline_rewards(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    let deadlines: Vec<usize> = sc.take(n)?;
    let rewards: Vec<i64> = sc.take(n)?;

    let mut games: Vec<(usize, i64)> = deadlines.into_iter().zip(rewards).collect();
    games.sort_by(|a, b| b.1.cmp(&a.1));

    let slots = games.iter().map(|&(t, _)| t).max().unwrap_or(0);
    let mut taken = vec![false; slots];
    let mut total = 0i64;
    for &(deadline, reward) in &games {
        // Latest free slot not past the deadline
        for t in (0..deadline).rev() {
            if !taken[t] {
                taken[t] = true;
                total += reward;
                break;
            }
        }
    }

    writeln!(out, "{}", total)?;
    Ok(())
}

/// Start from the best base score, then apply every helpful bonus. With a
/// single entry there is no alternative, so every bonus applies.
pub fn best_score(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    let m: usize = sc.next()?;
    assert!(n >= 1, "need at least one entry");
    let scores: Vec<i64> = sc.take(n)?;
    let bonuses: Vec<i64> = sc.take(m)?;

    let mut best = scores.iter().copied().max().unwrap_or(0);
    for &b in &bonuses {
        if n == 1 || b > 0 {
            best += b;
        }
    }

    writeln!(out, "{}", best)?;
    Ok(())
}

/// Sort the sequence, take the gcd g of adjacent differences, then print
/// gcd(g, a_min + i) for each query index i = 1..=q.
pub fn gcd_queries(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    let q: usize = sc.next()?;
    let mut a: Vec<u64> = sc.take(n)?;
    a.sort_unstable();

    let mut g = 0u64;
    for w in a.windows(2) {
        g = gcd(g, w[1] - w[0]);
    }

    // An empty sequence leaves g = 0 and an implicit minimum of 0
    let base = a.first().copied().unwrap_or(0);
    for i in 1..=q as u64 {
        writeln!(out, "{}", gcd(g, base + i))?;
    }
    Ok(())
}

/// 2n items each offer a base value b and an alternative c. Exactly n items
/// switch to their alternative; the best total is sum(b) plus the n largest
/// deltas c - b.
pub fn pair_bonus(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    assert!((1..=100_000).contains(&n), "n out of bounds");
    let b: Vec<i64> = sc.take(2 * n)?;
    let c: Vec<i64> = sc.take(2 * n)?;

    let mut ans: i64 = b.iter().sum();
    let mut deltas: Vec<i64> = b.iter().zip(&c).map(|(&b, &c)| c - b).collect();
    deltas.sort_unstable();
    ans += deltas[n..].iter().sum::<i64>();

    writeln!(out, "{}", ans)?;
    Ok(())
}

/// Maximum bitwise AND over all pairs, by partitioning on each bit from
/// the top: once two or more candidates share a set bit, the optimal pair
/// lies among them and the bit is locked in.
pub fn max_and_pair(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    let mut candidates: Vec<u32> = sc.take(n)?;

    let mut ans: u32 = 0;
    for bit in (0..32).rev() {
        let mask = 1u32 << bit;
        let with_bit = candidates.iter().filter(|&&x| x & mask != 0).count();
        if with_bit >= 2 {
            ans |= mask;
            candidates.retain(|&x| x & mask != 0);
        }
    }

    writeln!(out, "{}", ans)?;
    Ok(())
}

/// Count and sum of values in [0, n] whose popcount parity equals `parity`,
/// valid when n + 1 is a power of two. Ranges of four or more values split
/// evenly between the two parity classes, in count and in sum.
fn parity_block(n: i64, parity: i64) -> (i64, i64) {
    match n {
        0 => (1 - parity, 0),
        1 => (1, parity),
        _ => ((n + 1) / 2, n * (n + 1) / 4),
    }
}

/// Count and sum of values in [0, n] whose popcount parity equals `parity`.
///
/// Splits at the highest set bit of n: below it lies a full power-of-two
/// block, above it the set bit flips the required parity of the remaining
/// low bits.
fn parity_stats(n: i64, parity: i64) -> (i64, i64) {
    if n <= 1 {
        return parity_block(n, parity);
    }
    let top = 1i64 << (63 - n.leading_zeros());
    let (low_cnt, low_sum) = parity_block(top - 1, parity);
    let (high_cnt, high_sum) = parity_stats(n - top, 1 - parity);
    (low_cnt + high_cnt, low_sum + high_sum + top * high_cnt)
}

/// Sum of the integers in [l, r] with an odd number of set bits.
pub fn odd_bits_sum(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let l: i64 = sc.next()?;
    let r: i64 = sc.next()?;

    let ans = parity_stats(r, 1).1 - parity_stats(l - 1, 1).1;
    writeln!(out, "{}", ans)?;
    Ok(())
}
