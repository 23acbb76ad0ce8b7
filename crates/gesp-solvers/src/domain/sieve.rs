//! Prime sieves
//!
//! Two constructions: the classic sieve of Eratosthenes for a primality
//! bitmap, and the linear (Euler) sieve which additionally yields the prime
//! list and the largest-prime-factor table in O(n).

/// Eratosthenes primality sieve up to `n` inclusive.
#[derive(Clone, Debug)]
pub struct Sieve {
    is_prime: Vec<bool>,
}

impl Sieve {
    pub fn new(n: usize) -> Self {
        let mut is_prime = vec![true; n + 1];
        is_prime[0] = false;
        if n >= 1 {
            is_prime[1] = false;
        }
        let mut i = 2usize;
        while i * i <= n {
            if is_prime[i] {
                let mut j = i * i;
                while j <= n {
                    is_prime[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        Self { is_prime }
    }

    /// Upper bound the sieve was built for.
    pub fn bound(&self) -> usize {
        self.is_prime.len() - 1
    }

    /// Primality test for `x <= bound()`.
    pub fn is_prime(&self, x: usize) -> bool {
        self.is_prime[x]
    }

    /// All primes up to the bound, ascending.
    pub fn primes(&self) -> Vec<usize> {
        (2..self.is_prime.len()).filter(|&x| self.is_prime[x]).collect()
    }
}

/// Linear sieve: prime list plus largest-prime-factor table in O(n).
///
/// `max_factor[1] == 1` by convention, matching the smooth-count problem.
#[derive(Clone, Debug)]
pub struct LinearSieve {
    primes: Vec<usize>,
    max_factor: Vec<usize>,
}

impl LinearSieve {
    pub fn new(n: usize) -> Self {
        let mut composite = vec![false; n + 1];
        let mut max_factor = vec![0usize; n + 1];
        let mut primes = Vec::new();

        if n >= 1 {
            max_factor[1] = 1;
        }
        for i in 2..=n {
            if !composite[i] {
                max_factor[i] = i;
                primes.push(i);
            }
            for &p in &primes {
                if p * i > n {
                    break;
                }
                composite[p * i] = true;
                max_factor[p * i] = max_factor[i].max(p);
                if i % p == 0 {
                    break;
                }
            }
        }

        Self { primes, max_factor }
    }

    pub fn primes(&self) -> &[usize] {
        &self.primes
    }

    pub fn prime_count(&self) -> usize {
        self.primes.len()
    }

    /// Largest prime factor of `x` (`1` for `x == 1`).
    pub fn max_prime_factor(&self, x: usize) -> usize {
        self.max_factor[x]
    }

    /// Count of `x` in `1..=n` whose largest prime factor is at most `bound`.
    pub fn smooth_count(&self, bound: usize) -> usize {
        (1..self.max_factor.len())
            .filter(|&x| self.max_factor[x] <= bound)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_small_primes() {
        let s = Sieve::new(30);
        let primes: Vec<usize> = s.primes();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(!s.is_prime(0));
        assert!(!s.is_prime(1));
        assert!(!s.is_prime(25));
    }

    #[test]
    fn test_sieve_bound_is_inclusive() {
        let s = Sieve::new(13);
        assert_eq!(s.bound(), 13);
        assert!(s.is_prime(13));
    }

    #[test]
    fn test_linear_sieve_matches_eratosthenes() {
        let a = Sieve::new(1000);
        let b = LinearSieve::new(1000);
        assert_eq!(a.primes(), b.primes().to_vec());
    }

    #[test]
    fn test_linear_sieve_max_factor() {
        let s = LinearSieve::new(100);
        assert_eq!(s.max_prime_factor(1), 1);
        assert_eq!(s.max_prime_factor(2), 2);
        assert_eq!(s.max_prime_factor(12), 3);
        assert_eq!(s.max_prime_factor(97), 97);
        assert_eq!(s.max_prime_factor(98), 7);
    }

    #[test]
    fn test_smooth_count() {
        // x in 1..=10 with largest prime factor <= 3: 1, 2, 3, 4, 6, 8, 9
        let s = LinearSieve::new(10);
        assert_eq!(s.smooth_count(3), 7);
        assert_eq!(s.smooth_count(10), 10);
        assert_eq!(s.smooth_count(1), 1);
    }

    #[test]
    fn test_prime_count() {
        let s = LinearSieve::new(100_000);
        assert_eq!(s.prime_count(), 9592);
    }
}
