//! Facade for consumers
//!
//! Name, date and template generators draw all their randomness through
//! this module and never touch engine state directly.
//!
//! - [`Faker`] owns its own stream. Creating one is the explicit opt-in for
//!   an independent sequence (e.g. one per worker thread); it does not
//!   observe or disturb the process-wide stream.
//! - [`global`] is the process-wide stream every consumer shares by default.

pub mod global;

use crate::checkpoint::StateCheckpoint;
use crate::config::FakerConfig;
use crate::error::RandomError;
use crate::random::{self, AlphaOptions, Bound};
use crate::rng::{RandomState, SeedValue};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Independent deterministic generator
///
/// # Example
/// ```
/// use puregen_core_rs::Faker;
///
/// let mut a = Faker::new(100_i64).unwrap();
/// let mut b = Faker::new(100_i64).unwrap();
/// assert_eq!(a.uuid(), b.uuid());
/// assert_eq!(a.number(10).unwrap(), b.number(10).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Faker {
    state: RandomState,
}

impl Faker {
    pub fn new(seed: impl Into<SeedValue>) -> Result<Self, RandomError> {
        Ok(Self {
            state: RandomState::new(seed)?,
        })
    }

    pub fn from_config(config: &FakerConfig) -> Result<Self, RandomError> {
        Self::new(config.effective_seed())
    }

    /// Wrap an existing stream
    pub fn from_state(state: RandomState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &RandomState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RandomState {
        &mut self.state
    }

    pub fn into_state(self) -> RandomState {
        self.state
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    pub fn seed(&mut self, value: impl Into<SeedValue>) -> Result<(), RandomError> {
        self.state.seed(value)
    }

    pub fn seed_from_array(&mut self, keys: &[i64]) -> Result<(), RandomError> {
        self.state.seed_from_array(keys)
    }

    // ========================================================================
    // Draws
    // ========================================================================

    pub fn number(&mut self, bound: impl Into<Bound>) -> Result<f64, RandomError> {
        random::number(&mut self.state, bound)
    }

    pub fn float(&mut self, bound: impl Into<Bound>) -> Result<f64, RandomError> {
        random::float(&mut self.state, bound)
    }

    pub fn integer(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        random::integer(&mut self.state, min, max)
    }

    pub fn boolean(&mut self) -> bool {
        random::boolean(&mut self.state)
    }

    pub fn array_element<'a, T>(&mut self, seq: &'a [T]) -> Result<&'a T, RandomError> {
        random::array_element(&mut self.state, seq)
    }

    pub fn array_elements<T: Clone>(&mut self, seq: &[T], count: Option<usize>) -> Vec<T> {
        random::array_elements(&mut self.state, seq, count)
    }

    pub fn object_key<'a, K, V>(&mut self, map: &'a BTreeMap<K, V>) -> Result<&'a K, RandomError> {
        random::object_key(&mut self.state, map)
    }

    pub fn object_value<'a, K, V>(&mut self, map: &'a BTreeMap<K, V>) -> Result<&'a V, RandomError> {
        random::object_value(&mut self.state, map)
    }

    pub fn alpha(&mut self, options: impl Into<AlphaOptions>) -> String {
        random::alpha(&mut self.state, options)
    }

    pub fn alpha_numeric(&mut self, count: usize) -> String {
        random::alpha_numeric(&mut self.state, count)
    }

    pub fn hexa_decimal(&mut self, count: usize) -> String {
        random::hexa_decimal(&mut self.state, count)
    }

    pub fn uuid(&mut self) -> Uuid {
        random::uuid(&mut self.state)
    }

    // ========================================================================
    // Checkpointing
    // ========================================================================

    pub fn checkpoint(&self) -> StateCheckpoint {
        self.state.checkpoint()
    }

    pub fn restore(&mut self, checkpoint: &StateCheckpoint) -> Result<(), RandomError> {
        self.state.restore_from(checkpoint)
    }
}
