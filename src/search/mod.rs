//! Search algorithms.

pub mod binary_search;
