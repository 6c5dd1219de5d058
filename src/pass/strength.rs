//! Entropy-based strength heuristic.
//!
//! A function of the configuration only, never of a generated value, so the
//! UI can recompute it on every option change. It does not account for the
//! validator's rejection sampling narrowing the output distribution.

use std::fmt;

use crate::config::GenerationConfig;
use crate::pass::charset;

/// Qualitative strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adjusted character-space size, distinct from the actual pool sizes.
/// Pronounceable scaling is applied before ambiguous scaling, each with a
/// floor of 10.
fn effective_size(config: &GenerationConfig) -> f64 {
    let mut size = 52.0;
    if config.allow_numbers {
        size += 10.0;
    }
    if config.allow_specials {
        size += charset::SPECIALS.len() as f64;
    }

    let mut effective = if config.pronounceable {
        (size * 0.6).max(10.0)
    } else {
        size
    };
    if config.exclude_ambiguous {
        effective = (effective * 0.9).max(10.0);
    }
    effective
}

/// Estimated entropy in bits: `length * log2(effective size)`.
pub fn entropy_bits(config: &GenerationConfig) -> f64 {
    config.length as f64 * effective_size(config).log2()
}

/// Map the entropy estimate to a label.
pub fn estimate(config: &GenerationConfig) -> StrengthLabel {
    let bits = entropy_bits(config);
    if bits >= 100.0 {
        StrengthLabel::VeryStrong
    } else if bits >= 80.0 {
        StrengthLabel::Strong
    } else if bits >= 60.0 {
        StrengthLabel::Medium
    } else {
        StrengthLabel::Weak
    }
}
