//! Text processing utilities.

pub mod password;
pub mod word_frequency;
