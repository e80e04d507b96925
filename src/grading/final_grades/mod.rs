//! # Final Grades
//!
//! Computes a weighted final grade per student: 40% assignment mean, 30%
//! midterm, 30% final exam.

pub mod code;
pub mod test;

pub use code::*;

use crate::error::VerifyError;
use crate::registry::AlgorithmRunner;
use crate::utils::seeded_rng;
use crate::utils::timer::Variant;
use rand::Rng;
use std::sync::Arc;

/// A roster of `students` students with 1 to 10 assignments each.
pub fn generate_roster(students: usize, seed: u64) -> Roster {
    let mut rng = seeded_rng(seed);
    (0..students)
        .map(|i| {
            let assignments = (0..rng.random_range(1..=10))
                .map(|_| rng.random_range(0.0..=100.0))
                .collect();
            let scores = StudentScores {
                assignments,
                midterm: rng.random_range(0.0..=100.0),
                final_exam: rng.random_range(0.0..=100.0),
            };
            (format!("student-{:05}", i), scores)
        })
        .collect()
}

pub struct FinalGradesRunner;

impl AlgorithmRunner for FinalGradesRunner {
    fn name(&self) -> &'static str {
        "final_grades"
    }

    fn description(&self) -> &'static str {
        "Weighted final grade per student from assignments and two exams"
    }

    fn category(&self) -> &'static str {
        "grading"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let roster = Arc::new(generate_roster(size, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let roster = Arc::clone(&roster);
                let func = v.function;
                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, grades) = crate::measure!(func(&roster));
                        (elapsed, grades.ok().map(|g| g.values().sum::<f64>()))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
