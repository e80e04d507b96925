//! Tests for matrix transposition.

use super::code::available_variants;
use super::generate_matrix;
use crate::error::VerifyError;
use crate::utils::reference_variant;

/// Verify all variants produce the same results as the original
pub fn verify_all() -> Result<(), VerifyError> {
    let variants = available_variants();
    let original = reference_variant("transpose", &variants)?;

    let mut cases: Vec<Vec<Vec<i64>>> = [(0, 0), (1, 1), (1, 9), (9, 1), (7, 13)]
        .iter()
        .enumerate()
        .map(|(seed, &(rows, cols))| generate_matrix(rows, cols, seed as u64))
        .collect();
    cases.push(vec![vec![1, 2], vec![3]]);

    for matrix in &cases {
        let expected = (original.function)(matrix);
        for variant in variants.iter().filter(|v| v.name != "original") {
            let got = (variant.function)(matrix);
            if got != expected {
                return Err(VerifyError::mismatch(variant.name, matrix, &expected, &got));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::transpose::code::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_rectangular() {
        let matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&matrix),
                Ok(vec![vec![1, 4], vec![2, 5], vec![3, 6]]),
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_square() {
        let matrix = vec![vec![1, 2], vec![3, 4]];
        for variant in available_variants() {
            assert_eq!((variant.function)(&matrix), Ok(vec![vec![1, 3], vec![2, 4]]), "{}", variant.name);
        }
    }

    #[test]
    fn test_empty_shapes() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&[]), Ok(vec![]), "{}: no rows", variant.name);
            assert_eq!((variant.function)(&[vec![], vec![]]), Ok(vec![]), "{}: empty rows", variant.name);
        }
    }

    #[test]
    fn test_ragged_is_error() {
        let matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]];
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&matrix),
                Err(TransposeError::Ragged { row: 2, expected: 3, found: 1 }),
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_double_transpose_is_identity() {
        let matrix = generate_matrix(5, 8, 42);
        for variant in available_variants() {
            let once = (variant.function)(&matrix).expect("rectangular");
            assert_eq!(once.len(), 8);
            let twice = (variant.function)(&once).expect("rectangular");
            assert_eq!(twice, matrix, "{}", variant.name);
        }
    }

    #[test]
    fn test_error_message() {
        let err = TransposeError::Ragged { row: 1, expected: 2, found: 3 };
        assert_eq!(err.to_string(), "row 1 has 3 columns, expected 2");
    }
}
