//! Pure-Gen Core - Deterministic Randomness Engine
//!
//! Seeded fake-data generation: the same seed reproduces the same stream of
//! numbers, choices, strings and identifiers across runs and across
//! implementations.
//!
//! # Architecture
//!
//! - **rng**: MT19937 engine, seeds and the owned [`RandomState`] stream
//! - **random**: Distribution layer (bounded numbers, sampling, strings, UUIDs)
//! - **faker**: Facade used by consumers, owned ([`Faker`]) or process-wide ([`faker::global`])
//! - **checkpoint**: Replayable stream positions
//! - **config**: JSON configuration
//!
//! # Critical Invariants
//!
//! 1. The engine matches reference MT19937 output word for word
//! 2. All randomness is deterministic (seeded, never wall-clock)
//! 3. A failed call leaves the stream where it was
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod faker;
pub mod random;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::StateCheckpoint;
pub use config::FakerConfig;
pub use error::RandomError;
pub use faker::Faker;
pub use random::{AlphaOptions, Bound, NumericOptions};
pub use rng::{MersenneTwister, RandomState, SeedValue};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn puregen_core_rs(m: &pyo3::Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::faker::PyFaker>()?;
    Ok(())
}
