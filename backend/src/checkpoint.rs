//! Checkpoint - Save/Restore a Random Stream
//!
//! A checkpoint records where a stream is, not what its state words are:
//! the seed it started from, how many words have been drawn since, and a
//! SHA-256 hash of the engine state at that point. Restoring replays the
//! seed, fast-forwards by the draw count and checks the hash.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored stream continues with exactly the values
//!   the original would have produced
//! - **No arbitrary state**: Engine words are only ever produced by seeding
//!   and twisting, never loaded from outside
//! - **Hash matching**: A checkpoint whose replay does not reproduce its
//!   hash is rejected and nothing is replaced

use crate::error::RandomError;
use crate::rng::{RandomState, SeedValue};
use serde::{Deserialize, Serialize};

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Replayable position in a random stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCheckpoint {
    /// Seed the stream was built from
    pub seed: SeedValue,

    /// Words drawn since seeding
    pub draws: u64,

    /// SHA-256 of the engine state at this position
    pub state_hash: String,
}

impl StateCheckpoint {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, RandomError> {
        serde_json::to_string(self).map_err(|e| {
            RandomError::Serialization(format!("Checkpoint serialization failed: {}", e))
        })
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        serde_json::from_str(json).map_err(|e| {
            RandomError::Serialization(format!("Checkpoint deserialization failed: {}", e))
        })
    }
}

// ============================================================================
// Save / Restore
// ============================================================================

impl RandomState {
    /// Capture the current position of this stream
    pub fn checkpoint(&self) -> StateCheckpoint {
        StateCheckpoint {
            seed: self.seed_value().clone(),
            draws: self.draws(),
            state_hash: self.engine().state_hash(),
        }
    }

    /// Rebuild a stream from a checkpoint
    ///
    /// # Errors
    /// - [`RandomError::InvalidSeed`] if the recorded seed is invalid
    /// - [`RandomError::CheckpointMismatch`] if replay does not reach the
    ///   recorded state
    pub fn restore(checkpoint: &StateCheckpoint) -> Result<Self, RandomError> {
        let mut state = RandomState::new(checkpoint.seed.clone())?;
        state.discard(checkpoint.draws);

        let actual = state.engine().state_hash();
        if actual != checkpoint.state_hash {
            tracing::warn!(
                seed = ?checkpoint.seed,
                draws = checkpoint.draws,
                "checkpoint replay did not reproduce recorded state"
            );
            return Err(RandomError::CheckpointMismatch {
                expected: checkpoint.state_hash.clone(),
                actual,
            });
        }

        tracing::debug!(seed = ?checkpoint.seed, draws = checkpoint.draws, "restored random state");
        Ok(state)
    }

    /// Replace this stream with the one described by `checkpoint`
    ///
    /// On error the current stream is left unchanged.
    pub fn restore_from(&mut self, checkpoint: &StateCheckpoint) -> Result<(), RandomError> {
        *self = RandomState::restore(checkpoint)?;
        Ok(())
    }
}
