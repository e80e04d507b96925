//! Contract checks for binary search variants.
//!
//! Variants may pick different indices among duplicates, so they are checked
//! against the search contract instead of against each other's exact output.

use super::code::{available_variants, BinarySearchFn};
use crate::error::VerifyError;
use crate::utils::{reference_variant, seeded_rng};
use rand::Rng;

/// Check one search result against the contract.
pub fn check_contract(
    variant: &'static str,
    sequence: &[i32],
    target: i32,
    result: Option<usize>,
) -> Result<(), VerifyError> {
    let present = sequence.contains(&target);
    match result {
        Some(index) if sequence.get(index) == Some(&target) => Ok(()),
        Some(index) => Err(VerifyError::ContractViolation {
            variant,
            detail: format!(
                "index {} returned for target {} in a sequence of length {}, element there is {:?}",
                index,
                target,
                sequence.len(),
                sequence.get(index)
            ),
        }),
        None if present => Err(VerifyError::ContractViolation {
            variant,
            detail: format!(
                "target {} reported absent from a sequence of length {} that contains it",
                target,
                sequence.len()
            ),
        }),
        None => Ok(()),
    }
}

/// Fixed and randomized non-decreasing sequences covering the edge cases.
pub fn contract_sequences() -> Vec<Vec<i32>> {
    let mut sequences = vec![
        vec![],
        vec![42],
        vec![1, 3, 5, 7, 9],
        vec![1, 2, 2, 2, 3, 4, 5],
        vec![5; 1000],
        vec![i32::MIN, -1, 0, 1, i32::MAX],
    ];

    let mut rng = seeded_rng(0x5EA2C4);
    for len in 0..64 {
        let mut value: i32 = rng.random_range(-50..50);
        let sequence = (0..len)
            .map(|_| {
                value += rng.random_range(0..3);
                value
            })
            .collect();
        sequences.push(sequence);
    }

    sequences
}

/// Targets worth probing: every value in the sequence's range plus one on
/// each side (clamped at the type bounds).
fn probe_targets(sequence: &[i32]) -> Vec<i32> {
    match (sequence.first(), sequence.last()) {
        (Some(&first), Some(&last)) if (last as i64 - first as i64) <= 1024 => {
            (first.saturating_sub(1)..=last.saturating_add(1)).collect()
        }
        (Some(&first), Some(&last)) => {
            let mut targets = sequence.to_vec();
            targets.extend([first.saturating_sub(1), last.saturating_add(1), 2, -2]);
            targets
        }
        _ => vec![0, 7, -7],
    }
}

fn verify_variant(name: &'static str, function: BinarySearchFn) -> Result<(), VerifyError> {
    for sequence in contract_sequences() {
        for target in probe_targets(&sequence) {
            check_contract(name, &sequence, target, function(&sequence, &target))?;
        }
    }
    Ok(())
}

/// Verify every variant, the reference included, against the contract.
pub fn verify_all() -> Result<(), VerifyError> {
    let variants = available_variants();
    reference_variant("binary_search", &variants)?;

    for variant in &variants {
        log::debug!("binary_search: checking variant '{}'", variant.name);
        verify_variant(variant.name, variant.function)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::binary_search::code::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should satisfy the search contract");
    }

    #[test]
    fn test_empty_sequence() {
        let empty: [i32; 0] = [];
        for variant in available_variants() {
            assert_eq!((variant.function)(&empty, &1), None, "{}", variant.name);
        }
    }

    #[test]
    fn test_single_element() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&[42], &42), Some(0), "{}", variant.name);
            assert_eq!((variant.function)(&[42], &7), None, "{}", variant.name);
        }
    }

    #[test]
    fn test_distinct_sequence() {
        let sequence = [1, 3, 5, 7, 9];
        for variant in available_variants() {
            let search = variant.function;
            assert_eq!(search(&sequence, &5), Some(2), "{}: middle", variant.name);
            assert_eq!(search(&sequence, &4), None, "{}: gap", variant.name);
            assert_eq!(search(&sequence, &1), Some(0), "{}: first", variant.name);
            assert_eq!(search(&sequence, &9), Some(4), "{}: last", variant.name);
            assert_eq!(search(&sequence, &0), None, "{}: below", variant.name);
            assert_eq!(search(&sequence, &10), None, "{}: above", variant.name);
        }
    }

    #[test]
    fn test_duplicates_return_any_match() {
        let sequence = [1, 2, 2, 2, 3, 4, 5];
        for variant in available_variants() {
            let found = (variant.function)(&sequence, &2);
            assert!(
                matches!(found, Some(1..=3)),
                "{}: expected an index in 1..=3, got {:?}",
                variant.name,
                found
            );
        }
    }

    #[test]
    fn test_original_duplicate_probe_order() {
        // The first probe lands on index 3, which already matches.
        assert_eq!(binary_search_original(&[1, 2, 2, 2, 3, 4, 5], &2), Some(3));
        assert_eq!(binary_search_branchless(&[1, 2, 2, 2, 3, 4, 5], &2), Some(3));
    }

    #[test]
    fn test_large_even_sequence() {
        let evens: Vec<i32> = (0..200_000).step_by(2).collect();
        for variant in available_variants() {
            let search = variant.function;
            for value in (0..200_000).step_by(2) {
                assert_eq!(
                    search(&evens, &value),
                    Some(value as usize / 2),
                    "{}: even value {}",
                    variant.name,
                    value
                );
            }
            for value in (1..200_000).step_by(2) {
                assert_eq!(search(&evens, &value), None, "{}: odd value {}", variant.name, value);
            }
        }
    }

    #[test]
    fn test_all_identical() {
        let sequence = vec![5; 1000];
        for variant in available_variants() {
            let found = (variant.function)(&sequence, &5);
            assert!(
                matches!(found, Some(i) if i < 1000 && sequence[i] == 5),
                "{}: got {:?}",
                variant.name,
                found
            );
            assert_eq!((variant.function)(&sequence, &4), None, "{}", variant.name);
            assert_eq!((variant.function)(&sequence, &6), None, "{}", variant.name);
        }
    }

    #[test]
    fn test_randomized_sorted_sequences() {
        let mut rng = seeded_rng(2024);
        for _ in 0..200 {
            let len = rng.random_range(0..300);
            let mut sequence: Vec<i32> = (0..len).map(|_| rng.random_range(-100..100)).collect();
            sequence.sort();

            for variant in available_variants() {
                for (i, value) in sequence.iter().enumerate() {
                    let found = (variant.function)(&sequence, value);
                    assert!(
                        matches!(found, Some(j) if sequence[j] == sequence[i]),
                        "{}: {} not resolved in {:?}",
                        variant.name,
                        value,
                        sequence
                    );
                }
                for missing in [-101, 100, 150] {
                    assert_eq!((variant.function)(&sequence, &missing), None, "{}", variant.name);
                }
            }
        }
    }

    #[test]
    fn test_unsorted_input_terminates() {
        let mut rng = seeded_rng(99);
        let unsorted: Vec<i32> = (0..500).map(|_| rng.random_range(-20..20)).collect();
        for variant in available_variants() {
            for target in -25..25 {
                if let Some(i) = (variant.function)(&unsorted, &target) {
                    assert_eq!(unsorted[i], target, "{}: index must still match", variant.name);
                }
            }
        }
    }

    #[test]
    fn test_generic_over_ord() {
        let words = ["apple", "banana", "cherry", "date"];
        assert_eq!(binary_search_original(&words, &"cherry"), Some(2));
        assert_eq!(binary_search_original(&words, &"blueberry"), None);

        let chars: Vec<char> = "abcdefg".chars().collect();
        assert_eq!(binary_search_branchless(&chars, &'e'), Some(4));
    }

    #[test]
    fn test_sentinel_conversion() {
        assert_eq!(to_sentinel(None), NOT_FOUND);
        assert_eq!(to_sentinel(Some(4)), 4);
        assert_eq!(from_sentinel(-1), None);
        assert_eq!(from_sentinel(3), Some(3));
        assert_eq!(to_sentinel(binary_search_original(&[1, 3, 5, 7, 9], &4)), -1);
    }

    #[test]
    fn test_contract_check_reports_violations() {
        assert!(check_contract("probe", &[1, 2, 3], 2, Some(1)).is_ok());
        assert!(check_contract("probe", &[1, 2, 3], 4, None).is_ok());
        assert!(matches!(
            check_contract("probe", &[1, 2, 3], 2, None),
            Err(VerifyError::ContractViolation { variant: "probe", .. })
        ));
        assert!(check_contract("probe", &[1, 2, 3], 2, Some(7)).is_err());
    }
}
