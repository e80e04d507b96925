//! # Binary Search
//!
//! Finds a target in a non-decreasing sequence in O(log n) comparisons and
//! O(1) extra space, returning the index of a matching element or `None`.
//!
//! ## Contract
//!
//! - The empty sequence yields `None` without touching any element.
//! - With duplicates, *any* matching index may be returned. Callers needing
//!   the leftmost or rightmost match must use a bound search instead.
//! - Sortedness is a precondition and is not validated. Unsorted input gives
//!   an unspecified result, but every variant still terminates.
//!
//! ## Variants
//!
//! - **original**: half-open `[low, high)` narrowing with an early exit
//! - **branchless**: fixed-step halving, one comparison per step
//! - **std**: `slice::binary_search`
//! - **c-original**: the original loop in C, returning `-1` when absent

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;
pub use code::binary_search_original as binary_search;

use crate::error::VerifyError;
use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

/// Runner for the binary search algorithm
pub struct BinarySearchRunner;

impl AlgorithmRunner for BinarySearchRunner {
    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn description(&self) -> &'static str {
        "Finds a target in a sorted sequence by halving a half-open range"
    }

    fn category(&self) -> &'static str {
        "search"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
