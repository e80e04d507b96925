//! Order-preserving deduplication implementations.

use std::collections::HashSet;
use std::hash::Hash;

use crate::utils::VariantInfo;

/// Keep the first occurrence of each value by scanning the output so far.
///
/// Quadratic, but only needs `PartialEq`.
pub fn remove_duplicates_original<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Keep the first occurrence of each value, tracking seen values in a set.
pub fn remove_duplicates_hashset<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

pub type DedupFn = fn(&[i32]) -> Vec<i32>;

pub fn available_variants() -> Vec<VariantInfo<DedupFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Linear membership check against the output",
            function: remove_duplicates_original::<i32>,
        },
        VariantInfo {
            name: "hashset",
            description: "Seen-set filter in one pass",
            function: remove_duplicates_hashset::<i32>,
        },
    ]
}
