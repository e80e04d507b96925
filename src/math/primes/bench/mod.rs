//! Benchmark closures for prime generation.

use super::code::available_variants;
use crate::utils::timer::Variant;
use std::hint::black_box;

/// One closure per variant generating all primes below `size`. The result
/// sample is the prime count.
pub fn variant_closures<'a>(size: usize) -> Vec<Variant<'a>> {
    available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, primes) = crate::measure!(func(black_box(size)));
                    (elapsed, Some(primes.len() as f64))
                }),
            }
        })
        .collect()
}
