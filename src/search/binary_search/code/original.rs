//! Original (reference) implementation of binary search.

/// Find `target` in a non-decreasing slice.
///
/// Maintains the half-open range `[low, high)`, probing its midpoint. Returns
/// the index of *some* element equal to `target`, or `None`. When several
/// elements match, which one is returned is not specified.
///
/// The slice must be sorted; this is not checked. On unsorted input the
/// result is meaningless but the loop still terminates, because the range
/// shrinks on every iteration.
///
/// # Example
/// ```
/// use practice_algo::search::binary_search::binary_search_original;
///
/// assert_eq!(binary_search_original(&[1, 3, 5, 7, 9], &5), Some(2));
/// assert_eq!(binary_search_original(&[1, 3, 5, 7, 9], &4), None);
/// ```
pub fn binary_search_original<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = sequence.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let probe = &sequence[mid];

        if probe == target {
            return Some(mid);
        }
        if target > probe {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    None
}
