//! # Flatten Nested List
//!
//! Flattens an arbitrarily nested list into a single list, depth-first and
//! left to right.

pub mod code;
pub mod test;

pub use code::*;

use crate::error::VerifyError;
use crate::registry::AlgorithmRunner;
use crate::utils::seeded_rng;
use crate::utils::timer::Variant;
use rand::Rng;
use std::sync::Arc;

/// Build a nested list holding `size` values, nesting up to `max_depth` levels.
pub fn generate_nested(size: usize, max_depth: usize, seed: u64) -> Vec<Nested<i64>> {
    fn fill(rng: &mut impl Rng, remaining: &mut usize, depth: usize, max_depth: usize) -> Vec<Nested<i64>> {
        let mut items = Vec::new();
        while *remaining > 0 {
            if depth < max_depth && rng.random_bool(0.2) {
                items.push(Nested::List(fill(rng, remaining, depth + 1, max_depth)));
            } else {
                items.push(Nested::Value(rng.random_range(-1000..1000)));
                *remaining -= 1;
            }
            if depth > 0 && rng.random_bool(0.25) {
                break;
            }
        }
        items
    }

    let mut rng = seeded_rng(seed);
    let mut remaining = size;
    fill(&mut rng, &mut remaining, 0, max_depth)
}

pub struct FlattenRunner;

impl AlgorithmRunner for FlattenRunner {
    fn name(&self) -> &'static str {
        "flatten"
    }

    fn description(&self) -> &'static str {
        "Flattens an arbitrarily nested list, preserving left-to-right order"
    }

    fn category(&self) -> &'static str {
        "collections"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let nested = Arc::new(generate_nested(size, 8, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let nested = Arc::clone(&nested);
                let func = v.function;
                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, flat) = crate::measure!(func(&nested));
                        (elapsed, Some(flat.len() as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
