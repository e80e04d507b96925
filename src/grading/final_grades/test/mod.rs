//! Tests for weighted final grades.

use super::code::{available_variants, FinalGrades};
use super::generate_roster;
use crate::error::VerifyError;
use crate::utils::reference_variant;

const TOLERANCE: f64 = 1e-9;

fn grades_close(a: &FinalGrades, b: &FinalGrades) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|((ka, va), (kb, vb))| ka == kb && (va - vb).abs() < TOLERANCE)
}

/// Verify all variants agree with the original within floating point tolerance
pub fn verify_all() -> Result<(), VerifyError> {
    let variants = available_variants();
    let original = reference_variant("final_grades", &variants)?;

    for (students, seed) in [(0, 1), (1, 2), (50, 3)] {
        let roster = generate_roster(students, seed);
        let expected = (original.function)(&roster).map_err(|e| VerifyError::ContractViolation {
            variant: original.name,
            detail: e.to_string(),
        })?;
        for variant in variants.iter().filter(|v| v.name != "original") {
            match (variant.function)(&roster) {
                Ok(got) if grades_close(&got, &expected) => {}
                got => {
                    return Err(VerifyError::mismatch(
                        variant.name,
                        &format!("roster of {} (seed {})", students, seed),
                        &Ok::<_, String>(expected),
                        &got.map_err(|e| e.to_string()),
                    ))
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::final_grades::code::*;

    fn alice() -> Roster {
        let mut roster = Roster::new();
        roster.insert(
            "Alice".to_string(),
            StudentScores {
                assignments: vec![80.0, 90.0, 85.0],
                midterm: 88.0,
                final_exam: 92.0,
            },
        );
        roster
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_known_grade() {
        for variant in available_variants() {
            let grades = (variant.function)(&alice()).expect("Alice has assignments");
            assert!((grades["Alice"] - 88.0).abs() < 0.1, "{}: got {}", variant.name, grades["Alice"]);
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((ASSIGNMENT_WEIGHT + MIDTERM_WEIGHT + FINAL_WEIGHT - 1.0).abs() < 1e-12);
        let perfect = StudentScores {
            assignments: vec![100.0; 4],
            midterm: 100.0,
            final_exam: 100.0,
        };
        assert!((weighted_grade(&perfect).unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_assignments_is_error() {
        let mut roster = alice();
        roster.insert(
            "Bob".to_string(),
            StudentScores {
                assignments: vec![],
                midterm: 70.0,
                final_exam: 75.0,
            },
        );
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&roster),
                Err(GradeError::NoAssignments { student: "Bob".to_string() }),
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_empty_roster() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&Roster::new()), Ok(FinalGrades::new()), "{}", variant.name);
        }
    }
}
