//! # Remove Duplicates, Preserving Order
//!
//! Keeps the first occurrence of each distinct value in input order.

pub mod code;

pub use code::*;
pub use code::remove_duplicates_hashset as remove_duplicates_preserve_order;

use crate::error::VerifyError;
use crate::registry::AlgorithmRunner;
use crate::utils::seeded_rng;
use crate::utils::timer::Variant;
use rand::Rng;
use std::sync::Arc;

/// `size` values drawn from `size / 4` distinct ones, so most are repeats.
pub fn generate_items(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = seeded_rng(seed);
    let distinct = (size / 4).max(1) as i32;
    (0..size).map(|_| rng.random_range(0..distinct)).collect()
}

pub struct DedupRunner;

impl AlgorithmRunner for DedupRunner {
    fn name(&self) -> &'static str {
        "dedup"
    }

    fn description(&self) -> &'static str {
        "Removes duplicates while keeping first occurrences in order"
    }

    fn category(&self) -> &'static str {
        "collections"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let items = Arc::new(generate_items(size, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let items = Arc::clone(&items);
                let func = v.function;
                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, unique) = crate::measure!(func(&items));
                        (elapsed, Some(unique.len() as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
