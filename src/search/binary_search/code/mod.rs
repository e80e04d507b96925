//! Binary search implementations.

mod branchless;
#[cfg(c_implementation_active)]
pub mod c_impl;
mod original;

pub use branchless::binary_search_branchless;
pub use original::binary_search_original;

use crate::utils::VariantInfo;

/// Integer sentinel for "not found" used by index-returning callers
pub const NOT_FOUND: i64 = -1;

/// Convert a search result to the integer convention (`-1` when absent).
pub fn to_sentinel(result: Option<usize>) -> i64 {
    result.map_or(NOT_FOUND, |index| index as i64)
}

/// Convert an integer-convention result back; any negative value means absent.
pub fn from_sentinel(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}

/// Delegates to the standard library.
pub fn binary_search_std<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.binary_search(target).ok()
}

/// Variant signature, instantiated over `i32` for verification and benchmarks
pub type BinarySearchFn = fn(&[i32], &i32) -> Option<usize>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<BinarySearchFn>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<BinarySearchFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Half-open [low, high) search with early exit on equality",
            function: binary_search_original::<i32>,
        },
        VariantInfo {
            name: "branchless",
            description: "Fixed-step halving with a final equality check",
            function: binary_search_branchless::<i32>,
        },
        VariantInfo {
            name: "std",
            description: "slice::binary_search from the standard library",
            function: binary_search_std::<i32>,
        },
    ];

    #[cfg(c_implementation_active)]
    variants.push(VariantInfo {
        name: "c-original",
        description: "C half-open search returning -1 when absent",
        function: c_impl::binary_search_c_original,
    });

    variants
}
