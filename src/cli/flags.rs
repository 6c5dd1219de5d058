use crate::config::GenerationConfig;

/// Parsed command-line flags, prior to building the effective config.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub reset: bool,
    pub history: bool,
    pub clear_history: bool,
    pub strength_only: bool,
    pub numbers: bool,
    pub specials: bool,
    pub pronounceable: bool,
    pub allow_ambiguous: bool,
    pub no_confusing: bool,
    pub no_o_zero: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// True when any generation option was given explicitly.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.numbers
            || self.specials
            || self.pronounceable
            || self.allow_ambiguous
            || self.no_confusing
            || self.no_o_zero
    }

    /// Overlay explicit flags onto a base configuration.
    pub fn apply(&self, config: &mut GenerationConfig) {
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(number) = self.number {
            config.count = number;
        }
        if self.numbers {
            config.allow_numbers = true;
        }
        if self.specials {
            config.allow_specials = true;
        }
        if self.pronounceable {
            config.pronounceable = true;
        }
        if self.allow_ambiguous {
            config.exclude_ambiguous = false;
        }
        if self.no_confusing {
            config.restrict_confusing = true;
        }
        if self.no_o_zero {
            config.avoid_o_zero = true;
        }
    }
}
