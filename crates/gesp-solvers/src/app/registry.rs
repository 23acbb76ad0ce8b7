//! Problem registry
//!
//! Static table mapping problem ids to their solver functions. Ids are the
//! names the CLI accepts; summaries feed its usage listing.

use crate::app::SolveError;
use crate::app::solvers::{aggregation, number_theory, search};
use crate::infra::scanner::Scanner;
use std::io;

/// Solver entry point: parse from the scanner, write answer lines to `out`.
pub type SolverFn =
    for<'a, 'b, 'c> fn(&'a mut Scanner<&'b [u8]>, &'c mut dyn io::Write) -> Result<(), SolveError>;

/// One registered problem.
pub struct Problem {
    pub id: &'static str,
    pub summary: &'static str,
    pub run: SolverFn,
}

/// All supported problems, in registry order.
static PROBLEMS: &[Problem] = &[
    Problem {
        id: "factorize",
        summary: "print the prime factorization of N as p^e * q * ...",
        run: number_theory::factorize,
    },
    Problem {
        id: "exponent-sum",
        summary: "number of prime factors of n counted with multiplicity",
        run: number_theory::exponent_sum,
    },
    Problem {
        id: "lucky-numbers",
        summary: "sieve squares >= a and their multiples; answer next-lucky queries",
        run: number_theory::lucky_numbers,
    },
    Problem {
        id: "score-ranking",
        summary: "competition-rank students by (total, c+m, max(c,m))",
        run: aggregation::score_ranking,
    },
    Problem {
        id: "deadline-rewards",
        summary: "schedule unit-time games before their deadlines for max reward",
        run: aggregation::deadline_rewards,
    },
    Problem {
        id: "smooth-count",
        summary: "count x <= n whose largest prime factor is at most B",
        run: number_theory::smooth_count,
    },
    Problem {
        id: "min-stain-area",
        summary: "smallest sub-rectangle containing at least k marked cells",
        run: aggregation::min_stain_area,
    },
    Problem {
        id: "two-prime-check",
        summary: "per value, 1 if it has exactly two distinct prime factors",
        run: number_theory::two_prime_check,
    },
    Problem {
        id: "prime-count",
        summary: "1 plus the number of primes up to n",
        run: number_theory::prime_count,
    },
    Problem {
        id: "primitive-root",
        summary: "per (a, p), whether a is a primitive root modulo prime p",
        run: number_theory::primitive_root,
    },
    Problem {
        id: "banner-cut",
        summary: "max a x b flags cut from an n x m cloth (binary search on answer)",
        run: search::banner_cut,
    },
    Problem {
        id: "dedup-threshold",
        summary: "min threshold covering every value forced to relocate",
        run: search::dedup_threshold,
    },
    Problem {
        id: "tier-purchase",
        summary: "min cost to hold a strict plurality across tiers",
        run: search::tier_purchase,
    },
    Problem {
        id: "gcd-queries",
        summary: "gcd of pairwise differences, then gcd(g, a1 + i) per query",
        run: aggregation::gcd_queries,
    },
    Problem {
        id: "pair-bonus",
        summary: "sum of b plus the n largest deltas c - b",
        run: aggregation::pair_bonus,
    },
    Problem {
        id: "best-score",
        summary: "best base score plus every helpful bonus",
        run: aggregation::best_score,
    },
    Problem {
        id: "max-and-pair",
        summary: "maximum bitwise AND over all pairs (bitwise partition)",
        run: aggregation::max_and_pair,
    },
    Problem {
        id: "odd-bits-sum",
        summary: "sum of the integers in [l, r] with an odd number of set bits",
        run: aggregation::odd_bits_sum,
    },
    Problem {
        id: "prime-chase",
        summary: "steps to land on a prime subtracting 1, 2, 4, ... (-1 on overshoot)",
        run: number_theory::prime_chase,
    },
    Problem {
        id: "median-exponent",
        summary: "total moves to align every prime exponent to its median",
        run: number_theory::median_exponent,
    },
];

/// All registered problems.
pub fn problems() -> &'static [Problem] {
    PROBLEMS
}

/// Look up a problem by id.
pub fn find_problem(id: &str) -> Option<&'static Problem> {
    PROBLEMS.iter().find(|p| p.id == id)
}
