//! Weighted final grade computation.

use std::collections::BTreeMap;

use crate::utils::VariantInfo;

pub const ASSIGNMENT_WEIGHT: f64 = 0.4;
pub const MIDTERM_WEIGHT: f64 = 0.3;
pub const FINAL_WEIGHT: f64 = 0.3;

/// Raw scores for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentScores {
    pub assignments: Vec<f64>,
    pub midterm: f64,
    pub final_exam: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradeError {
    #[error("student '{student}' has no assignment scores")]
    NoAssignments { student: String },
}

pub type Roster = BTreeMap<String, StudentScores>;
pub type FinalGrades = BTreeMap<String, f64>;

/// Weighted grade of one student, or `None` without assignments.
pub fn weighted_grade(scores: &StudentScores) -> Option<f64> {
    if scores.assignments.is_empty() {
        return None;
    }
    let mean = scores.assignments.iter().sum::<f64>() / scores.assignments.len() as f64;
    Some(ASSIGNMENT_WEIGHT * mean + MIDTERM_WEIGHT * scores.midterm + FINAL_WEIGHT * scores.final_exam)
}

/// 40% assignment mean, 30% midterm, 30% final, per student.
///
/// ```
/// use practice_algo::grading::final_grades::{calculate_final_grades_original, Roster, StudentScores};
///
/// let mut roster = Roster::new();
/// roster.insert("Alice".into(), StudentScores { assignments: vec![80.0, 90.0, 85.0], midterm: 88.0, final_exam: 92.0 });
/// let grades = calculate_final_grades_original(&roster).unwrap();
/// assert!((grades["Alice"] - 88.0).abs() < 0.1);
/// ```
pub fn calculate_final_grades_original(students: &Roster) -> Result<FinalGrades, GradeError> {
    students
        .iter()
        .map(|(name, scores)| {
            weighted_grade(scores)
                .map(|grade| (name.clone(), grade))
                .ok_or_else(|| GradeError::NoAssignments {
                    student: name.clone(),
                })
        })
        .collect()
}

/// Single accumulation pass over the assignments with the weights folded in.
pub fn calculate_final_grades_fused(students: &Roster) -> Result<FinalGrades, GradeError> {
    let mut grades = FinalGrades::new();
    for (name, scores) in students {
        let count = scores.assignments.len();
        if count == 0 {
            return Err(GradeError::NoAssignments {
                student: name.clone(),
            });
        }
        let per_assignment = ASSIGNMENT_WEIGHT / count as f64;
        let assignments: f64 = scores.assignments.iter().map(|s| s * per_assignment).sum();
        grades.insert(
            name.clone(),
            assignments + MIDTERM_WEIGHT * scores.midterm + FINAL_WEIGHT * scores.final_exam,
        );
    }
    Ok(grades)
}

pub type GradesFn = fn(&Roster) -> Result<FinalGrades, GradeError>;

pub fn available_variants() -> Vec<VariantInfo<GradesFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Mean of assignments, then weighted sum",
            function: calculate_final_grades_original,
        },
        VariantInfo {
            name: "fused",
            description: "Assignment weight folded into the accumulation",
            function: calculate_final_grades_fused,
        },
    ]
}
