//! # Practice-Algo
//!
//! Textbook algorithm exercises, each with a reference `original` variant,
//! alternative variants verified against it, and a benchmark harness.
//!
//! The centerpiece is [`search::binary_search`], whose boundary contract
//! (empty input, duplicates, absent targets) is pinned down by its tests.

pub mod collections;
pub mod error;
pub mod grading;
pub mod math;
pub mod matrix;
pub mod registry;
pub mod search;
pub mod text;
pub mod utils;

pub use error::VerifyError;
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::collections::dedup::remove_duplicates_preserve_order;
    pub use crate::collections::flatten::{flatten_original as flatten, Nested};
    pub use crate::collections::merge_catalogs::{merge_catalogs_original as merge_catalogs, Catalog};
    pub use crate::grading::final_grades::{
        calculate_final_grades_original as calculate_final_grades, GradeError, StudentScores,
    };
    pub use crate::math::primes::generate_primes;
    pub use crate::matrix::transpose::{transpose_original as transpose, TransposeError};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::search::binary_search::{binary_search, to_sentinel, NOT_FOUND};
    pub use crate::text::password::validate_password;
    pub use crate::text::word_frequency::{word_frequency_hashmap as word_frequency, DEFAULT_TOP_N};
}
