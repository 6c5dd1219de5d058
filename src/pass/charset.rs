//! Character pool construction for password generation.

use crate::config::GenerationConfig;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const VOWELS: &str = "aeiouy";
const VOWELS_NO_O: &str = "aeiuy";
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxz";

/// Fixed special character set; never subject to ambiguous stripping.
pub const SPECIALS: &str = "!@#$%^&*()_+-={}[]<>?";

/// Visually confusable in many fonts.
pub const AMBIGUOUS: &[char] = &['O', '0', 'I', 'l', '1'];

/// The derived alphabets for one generation call. Built once per call,
/// never mutated afterward.
#[derive(Debug, Clone)]
pub struct CharacterPool {
    pub lower: String,
    pub upper: String,
    pub digits: String,
    pub specials: String,
    pub vowels: String,
    pub consonants: String,
}

/// Derive the pools from the configuration. Pure function.
pub fn build(config: &GenerationConfig) -> CharacterPool {
    let lower = strip_ambiguous(LOWERCASE, config.exclude_ambiguous);
    let upper = strip_ambiguous(UPPERCASE, config.exclude_ambiguous);
    let digits = strip_ambiguous(DIGITS, config.exclude_ambiguous);

    // Dropping the vowel o only matters when a 0 can actually appear.
    let vowel_base = if config.avoid_o_zero && config.allow_numbers {
        VOWELS_NO_O
    } else {
        VOWELS
    };
    let mut vowels = strip_ambiguous(vowel_base, config.exclude_ambiguous);
    let mut consonants = strip_ambiguous(CONSONANTS, config.exclude_ambiguous);

    // Pronounceable picks would otherwise keep tripping the confusing-chars
    // rule and burning retry attempts.
    if config.restrict_confusing {
        vowels = drop_char(&vowels, 'i');
        consonants = drop_char(&consonants, 'l');
    }

    CharacterPool {
        lower,
        upper,
        digits,
        specials: SPECIALS.to_string(),
        vowels,
        consonants,
    }
}

fn strip_ambiguous(pool: &str, enabled: bool) -> String {
    if !enabled {
        return pool.to_string();
    }
    let stripped: String = pool.chars().filter(|c| !AMBIGUOUS.contains(c)).collect();
    // Never strip a pool down to nothing.
    if stripped.is_empty() {
        pool.to_string()
    } else {
        stripped
    }
}

fn drop_char(pool: &str, unwanted: char) -> String {
    let dropped: String = pool.chars().filter(|&c| c != unwanted).collect();
    if dropped.is_empty() {
        pool.to_string()
    } else {
        dropped
    }
}
