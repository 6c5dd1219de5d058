//! Candidate generation and the accept/retry orchestrator.

use zeroize::Zeroize;

use super::charset::{self, CharacterPool};
use super::validate;
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::rng::{secure_index, secure_pick, secure_shuffle};

/// Attempt ceiling per requested password. Guards against restriction
/// combinations the generators cannot structurally satisfy.
pub const MAX_ATTEMPTS: usize = 1500;

/// Accepted output of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Single(String),
    Batch(Vec<String>),
}

impl Generated {
    /// All passwords in batch order.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Generated::Single(password) => vec![password],
            Generated::Batch(passwords) => passwords,
        }
    }

    /// One password per line, the clipboard format.
    pub fn joined(&self) -> String {
        match self {
            Generated::Single(password) => password.clone(),
            Generated::Batch(passwords) => passwords.join("\n"),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Generated::Single(_) => 1,
            Generated::Batch(passwords) => passwords.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate one password or a small batch.
///
/// Fails fast on the precondition checks, then runs the bounded retry loop
/// per requested password. Exceeding the attempt ceiling aborts the whole
/// batch; callers never receive fewer passwords than requested.
pub fn generate(config: &GenerationConfig) -> Result<Generated, GenerationError> {
    config.validate()?;

    let pool = charset::build(config);
    let count = config.clamped_count();
    let mut passwords: Vec<String> = Vec::with_capacity(count);

    for _ in 0..count {
        match generate_one(config, &pool) {
            Ok(password) => passwords.push(password),
            Err(e) => {
                // No partial batches; scrub what was already accepted.
                for password in &mut passwords {
                    password.zeroize();
                }
                return Err(e);
            }
        }
    }

    if count == 1 {
        Ok(Generated::Single(passwords.swap_remove(0)))
    } else {
        Ok(Generated::Batch(passwords))
    }
}

/// Draft/validate loop for a single password.
fn generate_one(
    config: &GenerationConfig,
    pool: &CharacterPool,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_ATTEMPTS {
        let mut candidate = build_candidate(config, pool);
        if validate::check(&candidate, config) {
            return Ok(candidate);
        }
        candidate.zeroize();
    }
    Err(GenerationError::ConstraintUnsatisfiable)
}

/// One raw candidate: strategy base plus the mandatory suffix. The suffix
/// characters come from the already-stripped pools and are not shuffled in,
/// so their presence survives any base-length edge case.
fn build_candidate(config: &GenerationConfig, pool: &CharacterPool) -> String {
    let base_len = config
        .length
        .saturating_sub(config.mandatory_suffix_len())
        .max(1);

    let mut candidate = if config.pronounceable {
        pronounceable_base(pool, base_len)
    } else {
        mixed_base(config, pool, base_len)
    };

    if config.allow_numbers {
        candidate.push(secure_pick(&pool.digits));
    }
    if config.allow_specials {
        candidate.push(secure_pick(&pool.specials));
    }
    candidate
}

/// Uniform-mixed strategy: seed one lowercase and one uppercase character
/// for minimum diversity, fill from the union of the allowed pools, then
/// shuffle the whole seed.
fn mixed_base(config: &GenerationConfig, pool: &CharacterPool, base_len: usize) -> String {
    let mut available = String::with_capacity(84);
    available.push_str(&pool.lower);
    available.push_str(&pool.upper);
    if config.allow_numbers {
        available.push_str(&pool.digits);
    }
    if config.allow_specials {
        available.push_str(&pool.specials);
    }

    let mut seed: Vec<char> = vec![secure_pick(&pool.lower), secure_pick(&pool.upper)];
    while seed.len() < base_len {
        seed.push(secure_pick(&available));
    }
    secure_shuffle(&mut seed);
    seed.into_iter().collect()
}

/// Pronounceable strategy: alternate consonant/vowel picks, starting class
/// chosen by one secure coin flip, leading character upper-cased.
fn pronounceable_base(pool: &CharacterPool, base_len: usize) -> String {
    let consonant_first = secure_index(2) == 0;
    let mut out = String::with_capacity(base_len);

    for i in 0..base_len {
        let from = if (i % 2 == 0) == consonant_first {
            &pool.consonants
        } else {
            &pool.vowels
        };
        let ch = secure_pick(from);
        out.push(if i == 0 { ch.to_ascii_uppercase() } else { ch });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> GenerationConfig {
        GenerationConfig {
            length: 10,
            allow_numbers: true,
            exclude_ambiguous: true,
            count: 1,
            ..Default::default()
        }
    }

    fn single(config: &GenerationConfig) -> String {
        match generate(config).unwrap() {
            Generated::Single(password) => password,
            Generated::Batch(_) => panic!("expected a single password"),
        }
    }

    #[test]
    fn generated_length_matches_the_configuration() {
        for length in [6, 10, 37, 100] {
            let config = GenerationConfig {
                length,
                allow_specials: true,
                ..base_config()
            };
            assert_eq!(single(&config).chars().count(), length);
        }
    }

    #[test]
    fn numbers_flag_guarantees_a_digit() {
        for _ in 0..20 {
            let password = single(&base_config());
            assert!(password.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn specials_flag_guarantees_a_special() {
        let config = GenerationConfig {
            allow_specials: true,
            ..base_config()
        };
        for _ in 0..20 {
            let password = single(&config);
            assert!(password.chars().any(|c| charset::SPECIALS.contains(c)));
        }
    }

    #[test]
    fn ambiguous_exclusion_holds_over_many_draws() {
        let config = GenerationConfig {
            length: 40,
            allow_specials: true,
            ..base_config()
        };
        for _ in 0..50 {
            let password = single(&config);
            assert!(!password.chars().any(|c| charset::AMBIGUOUS.contains(&c)));
        }
    }

    #[test]
    fn confusing_restriction_holds_over_many_draws() {
        let config = GenerationConfig {
            length: 30,
            exclude_ambiguous: false,
            restrict_confusing: true,
            ..base_config()
        };
        for _ in 0..50 {
            let password = single(&config);
            let confusing = password
                .chars()
                .filter(|c| ['i', 'l', '1'].contains(c))
                .count();
            assert!(confusing <= 1, "too many confusing chars in {password:?}");
        }
    }

    #[test]
    fn o_zero_restriction_holds_over_many_draws() {
        let config = GenerationConfig {
            length: 30,
            exclude_ambiguous: false,
            avoid_o_zero: true,
            ..base_config()
        };
        for _ in 0..50 {
            let password = single(&config);
            let has_o = password.contains(['o', 'O']);
            let has_zero = password.contains('0');
            assert!(!(has_o && has_zero), "o and 0 together in {password:?}");
        }
    }

    #[test]
    fn invalid_length_fails_before_generation() {
        let config = GenerationConfig {
            length: 5,
            ..base_config()
        };
        assert_eq!(generate(&config), Err(GenerationError::InvalidLength(5)));
    }

    #[test]
    fn no_entropy_source_fails_before_generation() {
        let config = GenerationConfig {
            length: 10,
            allow_numbers: false,
            allow_specials: false,
            pronounceable: false,
            ..Default::default()
        };
        assert_eq!(generate(&config), Err(GenerationError::NoEntropySource));
    }

    #[test]
    fn consecutive_calls_differ() {
        let config = base_config();
        let first = single(&config);
        let second = single(&config);
        // Statistically overwhelming at length 10.
        assert_ne!(first, second);
    }

    #[test]
    fn pronounceable_base_alternates_and_starts_uppercase() {
        let config = GenerationConfig {
            length: 12,
            allow_numbers: false,
            pronounceable: true,
            ..base_config()
        };
        let vowels = "aeiouy";
        for _ in 0..30 {
            let password = single(&config);
            let first = password.chars().next().unwrap();
            assert!(first.is_ascii_uppercase(), "no leading capital in {password:?}");

            let classes: Vec<bool> = password
                .chars()
                .map(|c| vowels.contains(c.to_ascii_lowercase()))
                .collect();
            for pair in classes.windows(2) {
                assert_ne!(pair[0], pair[1], "no alternation in {password:?}");
            }
        }
    }

    #[test]
    fn mandatory_suffix_follows_the_pronounceable_base() {
        let config = GenerationConfig {
            length: 10,
            pronounceable: true,
            allow_numbers: true,
            allow_specials: true,
            ..base_config()
        };
        for _ in 0..20 {
            let password = single(&config);
            let chars: Vec<char> = password.chars().collect();
            assert!(chars[chars.len() - 2].is_ascii_digit());
            assert!(charset::SPECIALS.contains(chars[chars.len() - 1]));
        }
    }

    #[test]
    fn batch_count_is_clamped() {
        let config = GenerationConfig {
            count: 99,
            ..base_config()
        };
        match generate(&config).unwrap() {
            Generated::Batch(passwords) => assert_eq!(passwords.len(), 3),
            Generated::Single(_) => panic!("expected a batch"),
        }

        let config = GenerationConfig {
            count: 0,
            ..base_config()
        };
        assert!(matches!(generate(&config).unwrap(), Generated::Single(_)));
    }

    #[test]
    fn batch_passwords_all_satisfy_the_constraints() {
        let config = GenerationConfig {
            count: 3,
            allow_specials: true,
            ..base_config()
        };
        for password in generate(&config).unwrap().into_vec() {
            assert_eq!(password.chars().count(), 10);
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| charset::SPECIALS.contains(c)));
        }
    }

    #[test]
    fn joined_output_is_one_password_per_line() {
        let generated = Generated::Batch(vec!["abc".into(), "def".into()]);
        assert_eq!(generated.joined(), "abc\ndef");
        let generated = Generated::Single("abc".into());
        assert_eq!(generated.joined(), "abc");
    }
}
