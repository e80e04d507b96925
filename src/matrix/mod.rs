//! Matrix utilities.

pub mod transpose;
