//! Generation configuration.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 100;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 3;

/// Options for one generation call. Immutable once passed to the engine;
/// also the record persisted by the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Password length, 6 to 100 inclusive.
    pub length: usize,
    /// Guarantee at least one digit.
    pub allow_numbers: bool,
    /// Guarantee at least one special character.
    pub allow_specials: bool,
    /// Alternate consonant/vowel picks instead of uniform-mixed.
    pub pronounceable: bool,
    /// Strip O, 0, I, l, 1 from the pools and reject candidates containing them.
    pub exclude_ambiguous: bool,
    /// Reject candidates with more than one of i, l, 1.
    pub restrict_confusing: bool,
    /// Reject candidates containing both o/O and 0.
    pub avoid_o_zero: bool,
    /// How many passwords per call, clamped to 1..=3 at use sites.
    pub count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 10,
            allow_numbers: false,
            allow_specials: false,
            pronounceable: false,
            exclude_ambiguous: true,
            restrict_confusing: false,
            avoid_o_zero: false,
            count: 3,
        }
    }
}

impl GenerationConfig {
    /// Batch size with the 1..=3 clamp applied.
    pub fn clamped_count(&self) -> usize {
        self.count.clamp(MIN_COUNT, MAX_COUNT)
    }

    /// Mandatory suffix characters: one digit and/or one special.
    pub fn mandatory_suffix_len(&self) -> usize {
        usize::from(self.allow_numbers) + usize::from(self.allow_specials)
    }

    /// Precondition checks, run before any generation attempt.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !self.pronounceable && !self.allow_numbers && !self.allow_specials {
            return Err(GenerationError::NoEntropySource);
        }
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(GenerationError::InvalidLength(self.length));
        }
        Ok(())
    }
}
