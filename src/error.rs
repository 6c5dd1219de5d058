//! Error types for generation and persistence.

use thiserror::Error;

/// Recoverable generation failures. The caller fixes these by adjusting
/// the configuration; none are fatal to the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Length outside the supported range.
    #[error("Password length must be between 6 and 100 (got {0})")]
    InvalidLength(usize),

    /// No generation mode selected. A password of only upper/lower letters
    /// is under-specified and rejected outright, not silently generated.
    #[error("Select pronounceable, numbers, or special characters before generating a password")]
    NoEntropySource,

    /// The attempt ceiling was exhausted without an acceptable candidate.
    #[error("Cannot generate a password with the current restrictions. Try relaxing some options")]
    ConstraintUnsatisfiable,
}

/// Failures from the preference and history stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed store file: {0}")]
    Format(#[from] serde_json::Error),

    #[error("No config directory available")]
    NoConfigDir,
}
