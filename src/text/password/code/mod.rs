//! Password validation implementations.

use crate::utils::VariantInfo;

pub const MIN_LENGTH: usize = 8;
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// A password requirement that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

/// Rules a password failed; empty when the password is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordReport {
    pub failed: Vec<PasswordRule>,
}

impl PasswordReport {
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Check every rule and report the ones that failed.
pub fn check_password(password: &str) -> PasswordReport {
    let checks = [
        (password.chars().count() >= MIN_LENGTH, PasswordRule::TooShort),
        (password.chars().any(|c| c.is_ascii_uppercase()), PasswordRule::MissingUppercase),
        (password.chars().any(|c| c.is_ascii_lowercase()), PasswordRule::MissingLowercase),
        (password.chars().any(|c| c.is_ascii_digit()), PasswordRule::MissingDigit),
        (password.chars().any(is_special), PasswordRule::MissingSpecial),
    ];
    PasswordReport {
        failed: checks
            .into_iter()
            .filter(|(passed, _)| !passed)
            .map(|(_, rule)| rule)
            .collect(),
    }
}

/// One scan per rule.
///
/// ```
/// use practice_algo::text::password::validate_password_original;
///
/// assert!(validate_password_original("Secure123!"));
/// assert!(!validate_password_original("weak"));
/// ```
pub fn validate_password_original(password: &str) -> bool {
    check_password(password).is_valid()
}

const UPPER: u8 = 1;
const LOWER: u8 = 1 << 1;
const DIGIT: u8 = 1 << 2;
const SPECIAL: u8 = 1 << 3;
const ALL_CLASSES: u8 = UPPER | LOWER | DIGIT | SPECIAL;

/// One scan setting a character-class bitmask.
pub fn validate_password_single_pass(password: &str) -> bool {
    let mut length = 0;
    let mut classes = 0u8;
    for c in password.chars() {
        length += 1;
        classes |= match c {
            'A'..='Z' => UPPER,
            'a'..='z' => LOWER,
            '0'..='9' => DIGIT,
            c if is_special(c) => SPECIAL,
            _ => 0,
        };
    }
    length >= MIN_LENGTH && classes == ALL_CLASSES
}

pub type ValidateFn = fn(&str) -> bool;

pub fn available_variants() -> Vec<VariantInfo<ValidateFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "One scan per rule",
            function: validate_password_original,
        },
        VariantInfo {
            name: "single_pass",
            description: "One scan accumulating a character-class bitmask",
            function: validate_password_single_pass,
        },
    ]
}
