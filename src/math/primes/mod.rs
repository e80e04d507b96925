//! # Prime Generation
//!
//! All primes strictly below an upper bound, in ascending order.
//!
//! ## Variants
//!
//! - **original**: trial division, O(n √n)
//! - **sieve**: sieve of Eratosthenes, O(n log log n) time, O(n) space

pub mod bench;
pub mod code;

pub use code::*;
pub use code::generate_primes_sieve as generate_primes;

use crate::error::VerifyError;
use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

pub struct PrimesRunner;

impl AlgorithmRunner for PrimesRunner {
    fn name(&self) -> &'static str {
        "primes"
    }

    fn description(&self) -> &'static str {
        "Generates all primes below an exclusive upper bound"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, _seed: u64) -> Vec<Variant<'_>> {
        bench::variant_closures(size)
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
