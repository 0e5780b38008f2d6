//! MT19937 Mersenne Twister
//!
//! The reference 32-bit Mersenne Twister by Matsumoto and Nishimura. Output
//! must match the reference `mt19937ar.c` word for word: every value the
//! rest of the crate produces is derived from this stream, so two
//! implementations seeded alike only agree if this engine does.
//!
//! # Algorithm
//!
//! 624 words of state are refreshed in one pass ("twist") every 624 draws.
//! Each output word is a state word passed through a fixed tempering
//! transform. Period is 2^19937 - 1.
//!
//! # Determinism
//!
//! Same seed → same sequence. State can only be produced by
//! [`MersenneTwister::seed_from_int`], [`MersenneTwister::seed_from_array`]
//! or the twist itself.

use crate::error::RandomError;
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of 32-bit words of generator state
pub const STATE_SIZE: usize = 624;

/// Seed used by the reference implementation when none is given
pub const DEFAULT_SEED: u32 = 5489;

const SHIFT_SIZE: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

const INIT_MULTIPLIER: u32 = 1_812_433_253;
const ARRAY_BASE_SEED: u32 = 19_650_218;
const ARRAY_MIX_MULTIPLIER: u32 = 1_664_525;
const ARRAY_FINAL_MULTIPLIER: u32 = 1_566_083_941;

/// Deterministic MT19937 generator
///
/// # Example
/// ```
/// use puregen_core_rs::rng::MersenneTwister;
///
/// let mut mt = MersenneTwister::new(5489);
/// assert_eq!(mt.next_u32(), 3_499_211_612);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MersenneTwister {
    /// State vector
    mt: [u32; STATE_SIZE],
    /// Next word to read; `STATE_SIZE` means "twist before reading"
    index: usize,
}

impl MersenneTwister {
    /// Create a generator seeded with a single integer
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            mt: [0; STATE_SIZE],
            index: STATE_SIZE,
        };
        engine.seed_from_int(seed);
        engine
    }

    /// Create a generator seeded from a key sequence
    ///
    /// # Errors
    /// [`RandomError::InvalidSeed`] if `keys` is empty.
    pub fn from_keys(keys: &[u32]) -> Result<Self, RandomError> {
        let mut engine = Self::new(ARRAY_BASE_SEED);
        engine.seed_from_array(keys)?;
        Ok(engine)
    }

    /// Reinitialize from a single integer (`init_genrand`)
    pub fn seed_from_int(&mut self, seed: u32) {
        self.mt[0] = seed;
        for i in 1..STATE_SIZE {
            let prev = self.mt[i - 1];
            self.mt[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = STATE_SIZE;
    }

    /// Reinitialize from a key sequence (`init_by_array`)
    ///
    /// Not equivalent to [`seed_from_int`](Self::seed_from_int) even for a
    /// single key, and sensitive to key order.
    ///
    /// # Errors
    /// [`RandomError::InvalidSeed`] if `keys` is empty. State is unchanged.
    pub fn seed_from_array(&mut self, keys: &[u32]) -> Result<(), RandomError> {
        if keys.is_empty() {
            return Err(RandomError::InvalidSeed(
                "seed array must contain at least one key".to_string(),
            ));
        }

        self.seed_from_int(ARRAY_BASE_SEED);

        let mut i = 1;
        let mut j = 0;
        for _ in 0..STATE_SIZE.max(keys.len()) {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(ARRAY_MIX_MULTIPLIER))
                .wrapping_add(keys[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= STATE_SIZE {
                self.mt[0] = self.mt[STATE_SIZE - 1];
                i = 1;
            }
            if j >= keys.len() {
                j = 0;
            }
        }

        for _ in 0..STATE_SIZE - 1 {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(ARRAY_FINAL_MULTIPLIER))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= STATE_SIZE {
                self.mt[0] = self.mt[STATE_SIZE - 1];
                i = 1;
            }
        }

        // MSB is 1, assuring a non-zero initial array
        self.mt[0] = UPPER_MASK;
        self.index = STATE_SIZE;
        Ok(())
    }

    /// Recompute all 624 words (the twist)
    fn regenerate(&mut self) {
        for i in 0..STATE_SIZE {
            let y = (self.mt[i] & UPPER_MASK) | (self.mt[(i + 1) % STATE_SIZE] & LOWER_MASK);
            let mut next = self.mt[(i + SHIFT_SIZE) % STATE_SIZE] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.mt[i] = next;
        }
        self.index = 0;
        tracing::trace!("regenerated mersenne twister state vector");
    }

    /// Generate the next tempered 32-bit word (`genrand_int32`)
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= STATE_SIZE {
            self.regenerate();
        }

        let mut y = self.mt[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Generate a value in `[min, max]` inclusive
    ///
    /// Reduces one 32-bit draw modulo the span. The resulting modulo bias
    /// is part of the output contract and must not be "fixed" with
    /// rejection sampling.
    ///
    /// # Errors
    /// [`RandomError::EmptySpan`] if `max < min`. No draw is consumed.
    ///
    /// # Example
    /// ```
    /// use puregen_core_rs::rng::MersenneTwister;
    ///
    /// let mut mt = MersenneTwister::new(42);
    /// let roll = mt.next_in_range(1, 6).unwrap();
    /// assert!((1..=6).contains(&roll));
    /// ```
    pub fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        let span = i128::from(max) - i128::from(min) + 1;
        if span <= 0 {
            return Err(RandomError::EmptySpan { min, max });
        }
        let offset = i128::from(self.next_u32()) % span;
        // offset < span, so min + offset <= max fits in i64
        Ok((i128::from(min) + offset) as i64)
    }

    /// Generate a 31-bit value (`genrand_int31`)
    pub fn next_u31(&mut self) -> u32 {
        self.next_u32() >> 1
    }

    /// Generate a real in `[0, 1]` (`genrand_real1`)
    pub fn next_real1(&mut self) -> f64 {
        f64::from(self.next_u32()) * (1.0 / 4_294_967_295.0)
    }

    /// Generate a real in `[0, 1)` (`genrand_real2`)
    pub fn next_real2(&mut self) -> f64 {
        f64::from(self.next_u32()) * (1.0 / 4_294_967_296.0)
    }

    /// Generate a real in `(0, 1)` (`genrand_real3`)
    pub fn next_real3(&mut self) -> f64 {
        (f64::from(self.next_u32()) + 0.5) * (1.0 / 4_294_967_296.0)
    }

    /// Generate a real in `[0, 1)` with 53-bit resolution (`genrand_res53`)
    ///
    /// Consumes two words.
    pub fn next_res53(&mut self) -> f64 {
        let a = f64::from(self.next_u32() >> 5);
        let b = f64::from(self.next_u32() >> 6);
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    /// Advance the stream by `count` words without producing them
    ///
    /// Leaves the generator exactly as `count` calls to
    /// [`next_u32`](Self::next_u32) would.
    pub fn discard(&mut self, mut count: u64) {
        while count > 0 {
            if self.index >= STATE_SIZE {
                self.regenerate();
            }
            let available = (STATE_SIZE - self.index) as u64;
            if count < available {
                self.index += count as usize;
                return;
            }
            count -= available;
            self.index = STATE_SIZE;
        }
    }

    /// SHA-256 over the state words (little-endian) and the read index
    ///
    /// Two generators with equal hashes produce equal streams.
    pub fn state_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for word in &self.mt {
            hasher.update(word.to_le_bytes());
        }
        hasher.update((self.index as u32).to_le_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Current read index (624 before the first draw after seeding)
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .field("state_hash", &self.state_hash())
            .finish()
    }
}
