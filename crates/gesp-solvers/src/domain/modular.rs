//! Modular arithmetic helpers

use crate::domain::factor::factorize;

/// Greatest common divisor, iterative Euclid. `gcd(0, x) == x`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// `base^exp mod modulus` by binary exponentiation.
///
/// # Panics
///
/// Panics if `modulus` is 0.
pub fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "zero modulus");
    if modulus == 1 {
        return 0;
    }

    let mut result = 1u64;
    let mut base = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}

/// Is `a` a primitive root modulo the prime `p`?
///
/// Checks `a^((p-1)/q) != 1` for every prime `q` dividing `p - 1`. The
/// caller guarantees `p` is prime; composite `p` gives meaningless results.
pub fn is_primitive_root(a: u64, p: u64) -> bool {
    if p == 2 {
        return a % 2 == 1;
    }
    if a % p == 0 {
        return false;
    }

    let phi = p - 1;
    factorize(phi)
        .iter()
        .all(|&(q, _)| pow_mod(a, phi / q, p) != 1)
}
