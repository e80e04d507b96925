//! # Merge Catalogs
//!
//! Merges two product catalogs (name to quantity). Products present in both
//! carry the sum of their quantities.

pub mod code;

pub use code::*;

use crate::error::VerifyError;
use crate::registry::AlgorithmRunner;
use crate::utils::seeded_rng;
use crate::utils::timer::Variant;
use rand::Rng;
use std::sync::Arc;

/// Two catalogs of `size` products each, drawn from a shared pool of names so
/// that about half the products overlap.
pub fn generate_catalogs(size: usize, seed: u64) -> (Catalog, Catalog) {
    let mut rng = seeded_rng(seed);
    let pool = (size * 2).max(1);
    let draw = |rng: &mut rand::rngs::StdRng| -> Catalog {
        (0..size)
            .map(|_| {
                (
                    format!("product-{}", rng.random_range(0..pool)),
                    rng.random_range(0..1000),
                )
            })
            .collect()
    };
    let a = draw(&mut rng);
    let b = draw(&mut rng);
    (a, b)
}

pub struct MergeCatalogsRunner;

impl AlgorithmRunner for MergeCatalogsRunner {
    fn name(&self) -> &'static str {
        "merge_catalogs"
    }

    fn description(&self) -> &'static str {
        "Merges two name-to-quantity catalogs, summing shared products"
    }

    fn category(&self) -> &'static str {
        "collections"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let catalogs = Arc::new(generate_catalogs(size, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let catalogs = Arc::clone(&catalogs);
                let func = v.function;
                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (a, b) = catalogs.as_ref();
                        let (elapsed, merged) = crate::measure!(func(a, b));
                        (elapsed, Some(merged.values().sum::<u64>() as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
