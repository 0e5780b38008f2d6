//! Generator configuration
//!
//! Loaded from JSON by hosts that keep their settings in files or pass them
//! across the FFI boundary. The seed is validated with the same rules as
//! direct seeding, so a malformed seed surfaces as
//! [`RandomError::InvalidSeed`] rather than a generic parse error.

use crate::error::RandomError;
use crate::rng::{SeedValue, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

/// Configuration for a [`Faker`](crate::Faker) or the global stream
///
/// # Example
/// ```
/// use puregen_core_rs::{FakerConfig, SeedValue};
///
/// let config = FakerConfig::from_json(r#"{"seed": [10, 100, 1000]}"#).unwrap();
/// assert_eq!(config.seed, Some(SeedValue::Array(vec![10, 100, 1000])));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FakerConfig {
    /// Seed for the stream; `None` uses the reference default (5489)
    pub seed: Option<SeedValue>,
}

impl FakerConfig {
    pub fn with_seed(seed: impl Into<SeedValue>) -> Self {
        Self {
            seed: Some(seed.into()),
        }
    }

    /// Seed to use, falling back to the default
    pub fn effective_seed(&self) -> SeedValue {
        self.seed
            .clone()
            .unwrap_or(SeedValue::Int(i64::from(DEFAULT_SEED)))
    }

    /// Parse and validate a JSON document
    ///
    /// # Errors
    /// - [`RandomError::Serialization`] if the document is not a JSON object
    /// - [`RandomError::InvalidSeed`] if `seed` is not an integer or a
    ///   non-empty array of 32-bit integers
    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        use serde_json::Value;

        let value: Value = serde_json::from_str(json).map_err(|e| {
            RandomError::Serialization(format!("Config deserialization failed: {}", e))
        })?;
        let object = value.as_object().ok_or_else(|| {
            RandomError::Serialization("Config must be a JSON object".to_string())
        })?;

        let seed = match object.get("seed") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(SeedValue::try_from(raw)?),
        };

        Ok(Self { seed })
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, RandomError> {
        serde_json::to_string(self).map_err(|e| {
            RandomError::Serialization(format!("Config serialization failed: {}", e))
        })
    }
}
