//! # Password Validation
//!
//! A password is valid when it is at least 8 characters long and contains
//! an uppercase letter, a lowercase letter, a digit and one of `!@#$%^&*`.

pub mod code;

pub use code::*;
pub use code::validate_password_original as validate_password;

use crate::error::VerifyError;
use crate::registry::AlgorithmRunner;
use crate::utils::seeded_rng;
use crate::utils::timer::Variant;
use rand::Rng;
use std::sync::Arc;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*-_ ";

/// `count` candidate passwords of 4 to 16 characters.
pub fn generate_passwords(count: usize, seed: u64) -> Vec<String> {
    let mut rng = seeded_rng(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(4..=16);
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

pub struct PasswordRunner;

impl AlgorithmRunner for PasswordRunner {
    fn name(&self) -> &'static str {
        "password"
    }

    fn description(&self) -> &'static str {
        "Checks length and character-class requirements of a password"
    }

    fn category(&self) -> &'static str {
        "text"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let passwords = Arc::new(generate_passwords(size, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let passwords = Arc::clone(&passwords);
                let func = v.function;
                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, valid) =
                            crate::measure!(passwords.iter().filter(|p| func(p)).count());
                        (elapsed, Some(valid as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
