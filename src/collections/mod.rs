//! Sequence and mapping utilities.

pub mod dedup;
pub mod flatten;
pub mod merge_catalogs;
