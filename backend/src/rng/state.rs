//! Seeded random stream
//!
//! [`RandomState`] owns the single engine of one logical stream together
//! with the seed it was built from and the number of words drawn since.
//! Every distribution function takes it by `&mut`.

use super::mersenne::{MersenneTwister, DEFAULT_SEED};
use super::seed::{SeedValue, SeedWords};
use crate::error::RandomError;

/// One deterministic stream of random words
///
/// # Example
/// ```
/// use puregen_core_rs::RandomState;
///
/// let mut a = RandomState::new(100_i64).unwrap();
/// let mut b = RandomState::new(100_i64).unwrap();
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Debug, Clone)]
pub struct RandomState {
    engine: MersenneTwister,
    seed: SeedValue,
    /// Words consumed since the last reseed
    draws: u64,
}

impl RandomState {
    /// Create a stream from a seed
    ///
    /// # Errors
    /// [`RandomError::InvalidSeed`] if the seed does not fit in 32 bits or
    /// is an empty sequence.
    pub fn new(seed: impl Into<SeedValue>) -> Result<Self, RandomError> {
        let mut state = Self::default();
        state.seed(seed)?;
        Ok(state)
    }

    /// Replace the stream with one derived from `value`
    ///
    /// An integer seeds through `init_genrand`, a sequence through
    /// `init_by_array`. The seed is validated before anything is touched,
    /// so a rejected seed leaves the current stream running.
    pub fn seed(&mut self, value: impl Into<SeedValue>) -> Result<(), RandomError> {
        let value = value.into();
        match value.to_words()? {
            SeedWords::Single(word) => self.engine.seed_from_int(word),
            SeedWords::Keys(keys) => self.engine.seed_from_array(&keys)?,
        }
        tracing::debug!(seed = ?value, "reseeded random state");
        self.seed = value;
        self.draws = 0;
        Ok(())
    }

    /// Reseed from a key sequence
    pub fn seed_from_array(&mut self, keys: &[i64]) -> Result<(), RandomError> {
        self.seed(SeedValue::Array(keys.to_vec()))
    }

    /// Next raw 32-bit word
    pub fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.engine.next_u32()
    }

    /// Next value in `[min, max]` inclusive
    ///
    /// # Errors
    /// [`RandomError::EmptySpan`] if `max < min`; nothing is drawn.
    pub fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        let value = self.engine.next_in_range(min, max)?;
        self.draws += 1;
        Ok(value)
    }

    /// Uniform index in `[0, upper]`
    ///
    /// Same draw and same result as `next_in_range(0, upper)`, for callers
    /// whose bound is known to be valid.
    pub(crate) fn pick_index(&mut self, upper: usize) -> usize {
        let span = upper as u64 + 1;
        (u64::from(self.next_u32()) % span) as usize
    }

    /// Real in `[0, 1)` with 53-bit resolution
    pub fn next_f64(&mut self) -> f64 {
        self.draws += 2;
        self.engine.next_res53()
    }

    /// Seed this stream was last built from
    pub fn seed_value(&self) -> &SeedValue {
        &self.seed
    }

    /// Words consumed since the last reseed
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Read-only view of the engine
    pub fn engine(&self) -> &MersenneTwister {
        &self.engine
    }

    /// Advance without producing values (checkpoint replay)
    pub(crate) fn discard(&mut self, count: u64) {
        self.engine.discard(count);
        self.draws += count;
    }
}

impl Default for RandomState {
    /// Stream seeded with the reference default seed 5489
    fn default() -> Self {
        Self {
            engine: MersenneTwister::new(DEFAULT_SEED),
            seed: SeedValue::Int(i64::from(DEFAULT_SEED)),
            draws: 0,
        }
    }
}
