//! # Word Frequency
//!
//! Top-N most frequent words of a text, case-insensitive, with punctuation
//! stripped. Ties are broken by first appearance.

pub mod code;
pub mod test;

pub use code::*;

use crate::error::VerifyError;
use crate::registry::AlgorithmRunner;
use crate::utils::seeded_rng;
use crate::utils::timer::Variant;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::Arc;

const VOCABULARY: &[&str] = &[
    "the", "cat", "and", "dog", "a", "bird", "sat", "on", "mat", "ran", "far", "away", "Hello",
    "world", "test", "quick", "brown", "fox", "jumps", "over", "lazy", "river", "stone", "tree",
];
const PUNCTUATION: &[&str] = &["", "", "", ".", ",", "!", "?", ";", "...", "!!!"];

/// A text of `words` words drawn from a small vocabulary with random
/// capitalization and trailing punctuation.
pub fn generate_text(words: usize, seed: u64) -> String {
    let mut rng = seeded_rng(seed);
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(' ');
        }
        let word = VOCABULARY.choose(&mut rng).copied().unwrap_or("word");
        if rng.random_bool(0.2) {
            text.push_str(&word.to_uppercase());
        } else {
            text.push_str(word);
        }
        text.push_str(PUNCTUATION.choose(&mut rng).copied().unwrap_or(""));
    }
    text
}

pub struct WordFrequencyRunner;

impl AlgorithmRunner for WordFrequencyRunner {
    fn name(&self) -> &'static str {
        "word_frequency"
    }

    fn description(&self) -> &'static str {
        "Top-N case-folded word counts with punctuation stripped"
    }

    fn category(&self) -> &'static str {
        "text"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let text = Arc::new(generate_text(size, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let text = Arc::clone(&text);
                let func = v.function;
                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, top) = crate::measure!(func(&text, DEFAULT_TOP_N));
                        (elapsed, top.first().map(|(_, count)| *count as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
