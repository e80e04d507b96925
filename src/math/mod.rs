//! Number-theoretic algorithms.

pub mod primes;
