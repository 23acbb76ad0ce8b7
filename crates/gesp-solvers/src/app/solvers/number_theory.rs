//! Number-theory solvers

use crate::app::SolveError;
use crate::constants::LUCKY_SIEVE_BOUND;
use crate::domain::factor::{self, distinct_prime_factors, tally_prime_exponents};
use crate::domain::modular::is_primitive_root;
use crate::domain::sieve::{LinearSieve, Sieve};
use crate::infra::scanner::Scanner;
use std::io::Write;

/// Print the prime factorization of N as `p^e * q * ...`.
///
/// Exponent 1 is left implicit. N = 1 prints an empty line.
pub fn factorize(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: u64 = sc.next()?;

    let mut first = true;
    for (p, e) in factor::factorize(n) {
        if !first {
            write!(out, " * ")?;
        }
        first = false;
        write!(out, "{}", p)?;
        if e > 1 {
            write!(out, "^{}", e)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Print the number of prime factors of n counted with multiplicity.
pub fn exponent_sum(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: u64 = sc.next()?;
    assert!(n >= 1, "n out of bounds");

    let total: u32 = factor::factorize(n).iter().map(|&(_, e)| e).sum();
    writeln!(out, "{}", total)?;
    Ok(())
}

/// Lucky numbers: squares >= a are lucky, and every multiple of a lucky
/// number is lucky. Per query x, print "lucky" or the next lucky number.
pub fn lucky_numbers(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let a: usize = sc.next()?;
    let t: usize = sc.next()?;

    let bound = LUCKY_SIEVE_BOUND;
    let mut lucky = vec![false; bound + 1];
    let mut s = 1usize;
    while s * s <= bound {
        if s * s >= a {
            lucky[s * s] = true;
        }
        s += 1;
    }
    // Lucky status propagates to multiples; ascending order reaches the
    // transitive closure in one pass.
    for i in 1..=bound {
        if !lucky[i] {
            continue;
        }
        let mut j = i + i;
        while j <= bound {
            lucky[j] = true;
            j += i;
        }
    }

    let mut next_lucky = vec![0usize; bound + 2];
    for i in (1..=bound).rev() {
        next_lucky[i] = if lucky[i] { i } else { next_lucky[i + 1] };
    }

    for _ in 0..t {
        let x: usize = sc.next()?;
        if lucky[x] {
            writeln!(out, "lucky")?;
        } else {
            writeln!(out, "{}", next_lucky[x])?;
        }
    }
    Ok(())
}

/// Count x in 1..=n whose largest prime factor is at most B.
pub fn smooth_count(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    let b: usize = sc.next()?;
    assert!((1..=1_000_000).contains(&n), "n out of bounds");
    assert!((1..=1_000_000).contains(&b), "B out of bounds");

    let sieve = LinearSieve::new(n);
    writeln!(out, "{}", sieve.smooth_count(b))?;
    Ok(())
}

/// Per value, print 1 if it has exactly two distinct prime factors, else 0.
pub fn two_prime_check(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    for _ in 0..n {
        let x: u64 = sc.next()?;
        writeln!(out, "{}", if distinct_prime_factors(x) == 2 { 1 } else { 0 })?;
    }
    Ok(())
}

/// Print 1 plus the number of primes up to n.
pub fn prime_count(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    let sieve = LinearSieve::new(n);
    writeln!(out, "{}", 1 + sieve.prime_count())?;
    Ok(())
}

/// Per (a, p) with p prime, print Yes if a is a primitive root mod p.
pub fn primitive_root(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let t: usize = sc.next()?;
    for _ in 0..t {
        let a: u64 = sc.next()?;
        let p: u64 = sc.next()?;
        writeln!(out, "{}", if is_primitive_root(a, p) { "Yes" } else { "No" })?;
    }
    Ok(())
}

/// Repeatedly subtract 1, 2, 4, ... until landing on a prime. Print the
/// number of steps (the landing test counts as one), or -1 when the
/// subtraction overshoots past zero. Landing exactly on zero keeps the
/// step count.
pub fn prime_chase(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let sieve = Sieve::new(100_000);
    let t: usize = sc.next()?;
    for _ in 0..t {
        let mut x: i64 = sc.next()?;
        let mut ans: i64 = 0;
        let mut step: i64 = 1;
        loop {
            if x > 0 && sieve.is_prime(x as usize) {
                ans += 1;
                break;
            }
            x -= step;
            ans += 1;
            if x <= 0 {
                if x < 0 {
                    ans = -1;
                }
                break;
            }
            step *= 2;
        }
        writeln!(out, "{}", ans)?;
    }
    Ok(())
}

/// For every prime appearing in the batch, count how far each value's
/// exponent sits from the median exponent (absent primes count as
/// exponent 0). Print the total distance.
pub fn median_exponent(sc: &mut Scanner<&[u8]>, out: &mut dyn Write) -> Result<(), SolveError> {
    let n: usize = sc.next()?;
    let values: Vec<u64> = sc.take(n)?;

    let tally = tally_prime_exponents(&values);
    let mut ans: i64 = 0;

    for counts in tally.values() {
        let max_e = counts.keys().copied().max().unwrap_or(0) as usize;
        let mut by_exp = vec![0usize; max_e + 1];
        for (&e, &c) in counts {
            by_exp[e as usize] = c;
        }
        let with_factor: usize = by_exp.iter().skip(1).sum();
        by_exp[0] = n - with_factor;

        // Smallest exponent whose cumulative count reaches half the batch
        let mut median = 0usize;
        let mut pos = 0usize;
        for (e, &c) in by_exp.iter().enumerate() {
            pos += c;
            if pos * 2 >= n {
                median = e;
                break;
            }
        }

        for (e, &c) in by_exp.iter().enumerate() {
            ans += c as i64 * (e as i64 - median as i64).abs();
        }
    }

    writeln!(out, "{}", ans)?;
    Ok(())
}
