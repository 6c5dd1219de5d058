//! Password generation engine: pools, candidates, validation, strength.

pub mod charset;
mod generate;
pub mod strength;
pub mod validate;

pub use generate::{Generated, MAX_ATTEMPTS, generate};
