//! Password generation engine with constraint validation and an
//! entropy-based strength estimate.
//!
//! The core is [`generate`], which builds character pools from a
//! [`GenerationConfig`], drafts candidates with one of two strategies
//! (uniform-mixed or pronounceable), and accepts the first candidate that
//! passes the active restrictions, bounded by an attempt ceiling.
//! [`estimate_strength`] is independent of generation and can be recomputed
//! whenever the configuration changes.
//!
//! ```no_run
//! use passgen::{GenerationConfig, estimate_strength, generate};
//!
//! let config = GenerationConfig {
//!     length: 16,
//!     allow_numbers: true,
//!     allow_specials: true,
//!     count: 1,
//!     ..Default::default()
//! };
//! let generated = generate(&config)?;
//! println!("{} ({})", generated.joined(), estimate_strength(&config));
//! # Ok::<(), passgen::GenerationError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod pass;
pub mod prefs;
pub mod rng;

pub use config::GenerationConfig;
pub use error::{GenerationError, StoreError};
pub use pass::strength::{StrengthLabel, entropy_bits};
pub use pass::{Generated, generate};

/// Qualitative strength of the configured output space.
pub fn estimate_strength(config: &GenerationConfig) -> StrengthLabel {
    pass::strength::estimate(config)
}
