//! Process-wide random stream
//!
//! One [`RandomState`] shared by the whole process, created on first use
//! with the default seed 5489. Every call takes the same lock, so draws from
//! different threads are serialized and observe a single stream; which
//! thread gets which value is up to the scheduler. Use [`with_state`] when a
//! compound value must come from consecutive draws.
//!
//! A draw never leaves the state half-updated, so a lock poisoned by a
//! panicking caller is recovered rather than propagated.

use crate::checkpoint::StateCheckpoint;
use crate::config::FakerConfig;
use crate::error::RandomError;
use crate::random::{self, AlphaOptions, Bound};
use crate::rng::{RandomState, SeedValue};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use uuid::Uuid;

static GLOBAL_STATE: OnceLock<Mutex<RandomState>> = OnceLock::new();

fn lock() -> MutexGuard<'static, RandomState> {
    GLOBAL_STATE
        .get_or_init(|| Mutex::new(RandomState::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` with exclusive access to the global stream
///
/// # Example
/// ```
/// use puregen_core_rs::faker::global;
/// use puregen_core_rs::random;
///
/// let (first, last) = global::with_state(|state| {
///     (random::alpha(state, 1_usize), random::alpha(state, 1_usize))
/// });
/// assert_eq!(first.len() + last.len(), 2);
/// ```
pub fn with_state<R>(f: impl FnOnce(&mut RandomState) -> R) -> R {
    let mut state = lock();
    f(&mut state)
}

/// Reseed the global stream
pub fn seed(value: impl Into<SeedValue>) -> Result<(), RandomError> {
    let value = value.into();
    with_state(|state| state.seed(value))
}

/// Reseed the global stream from a key sequence
pub fn seed_from_array(keys: &[i64]) -> Result<(), RandomError> {
    with_state(|state| state.seed_from_array(keys))
}

/// Apply a configuration to the global stream
pub fn configure(config: &FakerConfig) -> Result<(), RandomError> {
    seed(config.effective_seed())
}

pub fn number(bound: impl Into<Bound>) -> Result<f64, RandomError> {
    let bound = bound.into();
    with_state(|state| random::number(state, bound))
}

pub fn float(bound: impl Into<Bound>) -> Result<f64, RandomError> {
    let bound = bound.into();
    with_state(|state| random::float(state, bound))
}

pub fn integer(min: i64, max: i64) -> Result<i64, RandomError> {
    with_state(|state| random::integer(state, min, max))
}

pub fn boolean() -> bool {
    with_state(random::boolean)
}

pub fn array_element<T>(seq: &[T]) -> Result<&T, RandomError> {
    with_state(|state| random::array_element(state, seq))
}

pub fn array_elements<T: Clone>(seq: &[T], count: Option<usize>) -> Vec<T> {
    with_state(|state| random::array_elements(state, seq, count))
}

pub fn object_key<K, V>(map: &BTreeMap<K, V>) -> Result<&K, RandomError> {
    with_state(|state| random::object_key(state, map))
}

pub fn object_value<K, V>(map: &BTreeMap<K, V>) -> Result<&V, RandomError> {
    with_state(|state| random::object_value(state, map))
}

pub fn alpha(options: impl Into<AlphaOptions>) -> String {
    let options = options.into();
    with_state(|state| random::alpha(state, options))
}

pub fn alpha_numeric(count: usize) -> String {
    with_state(|state| random::alpha_numeric(state, count))
}

pub fn hexa_decimal(count: usize) -> String {
    with_state(|state| random::hexa_decimal(state, count))
}

pub fn uuid() -> Uuid {
    with_state(random::uuid)
}

pub fn checkpoint() -> StateCheckpoint {
    with_state(|state| state.checkpoint())
}

/// Move the global stream to `checkpoint`; unchanged on error
pub fn restore(checkpoint: &StateCheckpoint) -> Result<(), RandomError> {
    // Replay outside the lock so other draws are not held up
    let restored = RandomState::restore(checkpoint)?;
    with_state(|state| *state = restored);
    Ok(())
}
