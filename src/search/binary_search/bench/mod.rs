//! Benchmark closures for binary search.

use super::code::available_variants;
use crate::utils::seeded_rng;
use crate::utils::timer::Variant;
use rand::Rng;
use std::hint::black_box;
use std::sync::Arc;

/// Number of lookups performed per timed execution
pub const PROBES_PER_RUN: usize = 64;

/// Sorted input of `size` elements with occasional duplicates, plus a probe
/// set in which roughly half the targets are present.
pub fn generate_input(size: usize, seed: u64) -> (Vec<i32>, Vec<i32>) {
    let mut rng = seeded_rng(seed);
    let mut value = 0i32;
    let sequence: Vec<i32> = (0..size)
        .map(|_| {
            value = value.saturating_add(rng.random_range(0..3));
            value
        })
        .collect();

    let upper = value.saturating_add(1);
    let targets = (0..PROBES_PER_RUN)
        .map(|i| {
            if i % 2 == 0 && !sequence.is_empty() {
                sequence[rng.random_range(0..sequence.len())]
            } else {
                rng.random_range(-1..=upper)
            }
        })
        .collect();

    (sequence, targets)
}

/// One closure per variant; the result sample is the number of hits, which
/// every correct variant agrees on.
pub fn variant_closures<'a>(size: usize, seed: u64) -> Vec<Variant<'a>> {
    let (sequence, targets) = generate_input(size, seed);
    let sequence = Arc::new(sequence);
    let targets = Arc::new(targets);

    available_variants()
        .into_iter()
        .map(|v| {
            let sequence = Arc::clone(&sequence);
            let targets = Arc::clone(&targets);
            let search = v.function;

            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, hits) = crate::measure!(targets
                        .iter()
                        .filter(|&t| search(black_box(sequence.as_slice()), black_box(t)).is_some())
                        .count());
                    (elapsed, Some(hits as f64))
                }),
            }
        })
        .collect()
}
