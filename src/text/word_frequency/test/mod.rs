//! Tests for word frequency counting.

use super::code::available_variants;
use super::generate_text;
use crate::error::VerifyError;
use crate::utils::reference_variant;

/// Verify all variants produce the same results as the original
pub fn verify_all() -> Result<(), VerifyError> {
    let variants = available_variants();
    let original = reference_variant("word_frequency", &variants)?;

    let mut texts: Vec<String> = (0..8).map(|seed| generate_text(300, seed)).collect();
    texts.push(String::new());
    texts.push("... !!! ???".to_string());

    for text in &texts {
        for top_n in [0, 1, 5, 100] {
            let expected = (original.function)(text, top_n);
            for variant in variants.iter().filter(|v| v.name != "original") {
                let got = (variant.function)(text, top_n);
                if got != expected {
                    return Err(VerifyError::mismatch(
                        variant.name,
                        &format!("top {} of {:?}", top_n, text),
                        &expected,
                        &got,
                    ));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::word_frequency::code::*;

    fn pairs(expected: &[(&str, usize)]) -> Vec<(String, usize)> {
        expected.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_top_two() {
        for variant in available_variants() {
            assert_eq!(
                (variant.function)("The cat and the dog. The cat!", 2),
                pairs(&[("the", 3), ("cat", 2)]),
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_case_insensitive() {
        for variant in available_variants() {
            assert_eq!((variant.function)("Hello hello HELLO", 1), pairs(&[("hello", 3)]), "{}", variant.name);
        }
    }

    #[test]
    fn test_punctuation_stripped_and_ties_by_first_appearance() {
        let text = "Hello!!! World??? Test... Hello, world! Test; hello.";
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(text, DEFAULT_TOP_N),
                pairs(&[("hello", 3), ("world", 2), ("test", 2)]),
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        for variant in available_variants() {
            assert!((variant.function)("", 5).is_empty(), "{}", variant.name);
            assert!((variant.function)("-- ... !!", 5).is_empty(), "{}", variant.name);
            assert!((variant.function)("some words", 0).is_empty(), "{}", variant.name);
        }
    }

    #[test]
    fn test_normalization() {
        let words: Vec<String> = normalized_words("Don't STOP, re-use 42x! --").collect();
        assert_eq!(words, vec!["dont", "stop", "reuse", "42x"]);
    }
}
