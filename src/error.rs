//! Error types shared across the crate.

/// Failure reported by a variant verification.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("no 'original' reference variant registered for '{algorithm}'")]
    MissingReference { algorithm: &'static str },

    #[error("variant '{variant}' disagrees with 'original' on {input}: expected {expected}, got {got}")]
    Mismatch {
        variant: &'static str,
        input: String,
        expected: String,
        got: String,
    },

    #[error("variant '{variant}' violated its contract: {detail}")]
    ContractViolation {
        variant: &'static str,
        detail: String,
    },
}

impl VerifyError {
    /// Build a `Mismatch` from any debuggable input and outputs.
    pub fn mismatch<I, O>(variant: &'static str, input: &I, expected: &O, got: &O) -> Self
    where
        I: std::fmt::Debug + ?Sized,
        O: std::fmt::Debug + ?Sized,
    {
        Self::Mismatch {
            variant,
            input: format!("{:?}", input),
            expected: format!("{:?}", expected),
            got: format!("{:?}", got),
        }
    }
}
