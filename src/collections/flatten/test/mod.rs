//! Tests for nested-list flattening.

use super::code::available_variants;
use super::generate_nested;
use crate::error::VerifyError;
use crate::utils::reference_variant;

/// Verify all variants produce the same results as the original
pub fn verify_all() -> Result<(), VerifyError> {
    let variants = available_variants();
    let original = reference_variant("flatten", &variants)?;

    for seed in 0..16 {
        let nested = generate_nested(200, 6, seed);
        let expected = (original.function)(&nested);
        for variant in variants.iter().filter(|v| v.name != "original") {
            let got = (variant.function)(&nested);
            if got != expected {
                return Err(VerifyError::mismatch(variant.name, &format!("seed {}", seed), &expected, &got));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::flatten::code::Nested::{self, List, Value};

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_simple() {
        let nested = [Value(1), List(vec![Value(2), Value(3)]), Value(4)];
        for variant in available_variants() {
            assert_eq!((variant.function)(&nested), vec![1, 2, 3, 4], "{}", variant.name);
        }
    }

    #[test]
    fn test_deep() {
        let nested = [
            Value(1),
            List(vec![Value(2), List(vec![Value(3), Nested::list_of([4, 5])])]),
        ];
        for variant in available_variants() {
            assert_eq!((variant.function)(&nested), vec![1, 2, 3, 4, 5], "{}", variant.name);
        }
    }

    #[test]
    fn test_empty_lists() {
        let nested: [Nested<i64>; 3] = [List(vec![]), List(vec![List(vec![])]), Value(9)];
        for variant in available_variants() {
            assert_eq!((variant.function)(&[]), Vec::<i64>::new(), "{}: empty", variant.name);
            assert_eq!((variant.function)(&nested), vec![9], "{}: empty inner", variant.name);
        }
    }

    #[test]
    fn test_generated_value_count() {
        let nested = generate_nested(500, 5, 1);
        for variant in available_variants() {
            assert_eq!((variant.function)(&nested).len(), 500, "{}", variant.name);
        }
    }

    #[test]
    fn test_iterative_handles_deep_nesting() {
        let mut nested = Value(7i64);
        for _ in 0..100_000 {
            nested = List(vec![nested]);
        }
        let flat = crate::collections::flatten::flatten_iterative(std::slice::from_ref(&nested));
        assert_eq!(flat, vec![7]);
        // Nested's derived Drop recurses, so unwind the chain by hand.
        let mut current = Some(nested);
        while let Some(List(mut inner)) = current.take() {
            current = inner.pop();
        }
    }

    #[test]
    fn test_generic_strings() {
        let nested = [Nested::from("a".to_string()), Nested::list_of(["b".to_string(), "c".to_string()])];
        assert_eq!(crate::collections::flatten::flatten_original(&nested), vec!["a", "b", "c"]);
    }
}
