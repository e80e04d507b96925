//! Fixed-step binary search.
//!
//! Halves a `(base, size)` window with one comparison per step and no early
//! exit, so the loop body compiles to a conditional move. A single equality
//! check at the end decides between found and not found.

/// Same contract as [`binary_search_original`](super::binary_search_original).
///
/// With duplicates this variant lands on the last matching element.
pub fn binary_search_branchless<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    let mut size = sequence.len();
    if size == 0 {
        return None;
    }

    let mut base = 0;
    while size > 1 {
        let half = size / 2;
        let mid = base + half;
        // mid < base + size <= len
        base = if sequence[mid] > *target { base } else { mid };
        size -= half;
    }

    (sequence[base] == *target).then_some(base)
}
