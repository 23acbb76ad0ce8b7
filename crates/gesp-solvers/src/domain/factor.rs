//! Trial-division factorization

use rustc_hash::FxHashMap;

/// Factorize `x` into `(prime, exponent)` pairs, primes ascending.
///
/// `factorize(1)` (and `factorize(0)`) is the empty product.
pub fn factorize(mut x: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    if x < 2 {
        return factors;
    }

    let mut p = 2u64;
    while p * p <= x {
        if x % p == 0 {
            let mut e = 0u32;
            while x % p == 0 {
                x /= p;
                e += 1;
            }
            factors.push((p, e));
        }
        p += 1;
    }
    if x > 1 {
        factors.push((x, 1));
    }

    factors
}

/// Number of distinct prime factors of `x`.
pub fn distinct_prime_factors(x: u64) -> usize {
    factorize(x).len()
}

/// Tally prime exponents across a batch of values.
///
/// For each value the exponent of every prime dividing it is recorded, so
/// `tally[p]` maps exponent -> how many batch values carry `p^exponent`
/// exactly. Values not divisible by `p` are not recorded; callers that need
/// them count `n - recorded` as exponent 0.
pub fn tally_prime_exponents(values: &[u64]) -> FxHashMap<u64, FxHashMap<u32, usize>> {
    let mut tally: FxHashMap<u64, FxHashMap<u32, usize>> = FxHashMap::default();
    for &v in values {
        for (p, e) in factorize(v) {
            *tally.entry(p).or_default().entry(e).or_default() += 1;
        }
    }
    tally
}
