//! # Matrix Transpose
//!
//! Swaps the rows and columns of a rectangular matrix. Ragged input is an
//! error rather than a panic; an empty matrix transposes to an empty matrix.

pub mod code;
pub mod test;

pub use code::*;

use crate::error::VerifyError;
use crate::registry::AlgorithmRunner;
use crate::utils::seeded_rng;
use crate::utils::timer::Variant;
use rand::Rng;
use std::sync::Arc;

/// A `rows x cols` matrix of random values.
pub fn generate_matrix(rows: usize, cols: usize, seed: u64) -> Vec<Vec<i64>> {
    let mut rng = seeded_rng(seed);
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(-100..100)).collect())
        .collect()
}

pub struct TransposeRunner;

impl AlgorithmRunner for TransposeRunner {
    fn name(&self) -> &'static str {
        "transpose"
    }

    fn description(&self) -> &'static str {
        "Swaps rows and columns of a rectangular matrix"
    }

    fn category(&self) -> &'static str {
        "matrix"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        // `size` elements laid out as a wide matrix, 16 rows tall.
        let rows = 16.min(size.max(1));
        let matrix = Arc::new(generate_matrix(rows, size / rows, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let matrix = Arc::clone(&matrix);
                let func = v.function;
                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, transposed) = crate::measure!(func(&matrix));
                        (elapsed, transposed.ok().map(|t| t.len() as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
