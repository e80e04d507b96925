//! Grade computation.

pub mod final_grades;
