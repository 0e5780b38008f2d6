//! Seed values
//!
//! A seed is either a single integer or an ordered sequence of integers.
//! Integers must fit in 32 bits; negative values wrap to their two's
//! complement word, so `-1` seeds the same stream as `4294967295`.

use crate::error::RandomError;
use serde::{Deserialize, Serialize};

/// Smallest accepted seed integer
pub const MIN_SEED: i64 = i32::MIN as i64;

/// Largest accepted seed integer
pub const MAX_SEED: i64 = u32::MAX as i64;

/// A deterministic seed
///
/// # Example
/// ```
/// use puregen_core_rs::SeedValue;
///
/// let single = SeedValue::from(100_i64);
/// let keys = SeedValue::from(vec![10_i64, 100, 1000]);
/// assert_ne!(single, keys);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    /// Seeds through `init_genrand`
    Int(i64),
    /// Seeds through `init_by_array`
    Array(Vec<i64>),
}

impl SeedValue {
    /// Check every integer and convert to engine words
    pub(crate) fn to_words(&self) -> Result<SeedWords, RandomError> {
        match self {
            SeedValue::Int(value) => Ok(SeedWords::Single(to_word(*value)?)),
            SeedValue::Array(values) => {
                if values.is_empty() {
                    return Err(RandomError::InvalidSeed(
                        "seed array must contain at least one key".to_string(),
                    ));
                }
                let words = values
                    .iter()
                    .map(|v| to_word(*v))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SeedWords::Keys(words))
            }
        }
    }
}

/// Validated engine input
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SeedWords {
    Single(u32),
    Keys(Vec<u32>),
}

fn to_word(value: i64) -> Result<u32, RandomError> {
    if !(MIN_SEED..=MAX_SEED).contains(&value) {
        return Err(RandomError::InvalidSeed(format!(
            "{} is not representable in 32 bits",
            value
        )));
    }
    // Wrapping cast keeps negative seeds in two's complement
    Ok(value as u32)
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        SeedValue::Int(value)
    }
}

impl From<i32> for SeedValue {
    fn from(value: i32) -> Self {
        SeedValue::Int(i64::from(value))
    }
}

impl From<u32> for SeedValue {
    fn from(value: u32) -> Self {
        SeedValue::Int(i64::from(value))
    }
}

impl From<Vec<i64>> for SeedValue {
    fn from(values: Vec<i64>) -> Self {
        SeedValue::Array(values)
    }
}

impl From<&[i64]> for SeedValue {
    fn from(values: &[i64]) -> Self {
        SeedValue::Array(values.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for SeedValue {
    fn from(values: [i64; N]) -> Self {
        SeedValue::Array(values.to_vec())
    }
}

impl TryFrom<&serde_json::Value> for SeedValue {
    type Error = RandomError;

    /// Accept a JSON integer or a non-empty JSON array of integers
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        fn integer(value: &Value) -> Result<i64, RandomError> {
            match value {
                Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                    (Some(v), _) => Ok(v),
                    (None, Some(_)) => Err(RandomError::InvalidSeed(format!(
                        "{} is not representable in 32 bits",
                        n
                    ))),
                    _ => Err(RandomError::InvalidSeed(format!("{} is not an integer", n))),
                },
                other => Err(RandomError::InvalidSeed(format!(
                    "expected an integer, got {}",
                    other
                ))),
            }
        }

        let seed = match value {
            Value::Array(items) => SeedValue::Array(
                items.iter().map(integer).collect::<Result<Vec<_>, _>>()?,
            ),
            other => SeedValue::Int(integer(other)?),
        };
        seed.to_words()?;
        Ok(seed)
    }
}
