//! Prime generation implementations.

use crate::utils::VariantInfo;

/// Trial division by every candidate divisor up to the square root.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// All primes below `limit`, tested one by one.
///
/// ```
/// use practice_algo::math::primes::generate_primes_original;
///
/// assert_eq!(generate_primes_original(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// ```
pub fn generate_primes_original(limit: usize) -> Vec<usize> {
    (0..limit).filter(|&n| is_prime(n)).collect()
}

/// Sieve of Eratosthenes over `[0, limit)`.
pub fn generate_primes_sieve(limit: usize) -> Vec<usize> {
    if limit <= 2 {
        return Vec::new();
    }

    let mut composite = vec![false; limit];
    let mut p = 2;
    while p * p < limit {
        if !composite[p] {
            for multiple in (p * p..limit).step_by(p) {
                composite[multiple] = true;
            }
        }
        p += 1;
    }

    (2..limit).filter(|&n| !composite[n]).collect()
}

pub type PrimesFn = fn(usize) -> Vec<usize>;

pub fn available_variants() -> Vec<VariantInfo<PrimesFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Trial division of each candidate up to its square root",
            function: generate_primes_original,
        },
        VariantInfo {
            name: "sieve",
            description: "Sieve of Eratosthenes",
            function: generate_primes_sieve,
        },
    ]
}
