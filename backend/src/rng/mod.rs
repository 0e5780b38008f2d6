//! Deterministic random number generation
//!
//! Uses the MT19937 Mersenne Twister so that streams match other
//! implementations of the same library word for word.
//! CRITICAL: All randomness in the crate MUST go through this module.

mod mersenne;
mod seed;
mod state;

pub use mersenne::{MersenneTwister, DEFAULT_SEED, STATE_SIZE};
pub use seed::{SeedValue, MAX_SEED, MIN_SEED};
pub use state::RandomState;
