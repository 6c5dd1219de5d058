//! Candidate acceptance rules.

use crate::config::GenerationConfig;
use crate::pass::charset::AMBIGUOUS;

/// Lowercase/digit shapes that read alike; uppercase I is governed by
/// ambiguous exclusion, not this rule.
const CONFUSING: &[char] = &['i', 'l', '1'];

/// Accept or reject a candidate against the active restriction set.
/// Absent rules impose no constraint; all active rules must pass.
pub fn check(candidate: &str, config: &GenerationConfig) -> bool {
    if config.restrict_confusing {
        let confusing = candidate
            .chars()
            .filter(|c| CONFUSING.contains(c))
            .take(2)
            .count();
        if confusing > 1 {
            return false;
        }
    }

    if config.avoid_o_zero
        && candidate.contains(['o', 'O'])
        && candidate.contains('0')
    {
        return false;
    }

    // Pools are already stripped, but pronounceable mode uppercases the
    // leading character, which can reintroduce O or I. Keep the re-check.
    if config.exclude_ambiguous && candidate.chars().any(|c| AMBIGUOUS.contains(&c)) {
        return false;
    }

    true
}
