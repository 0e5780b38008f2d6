//! Type conversion utilities for FFI boundary
//!
//! Converts Python seeds and keyword options into crate types, and crate
//! errors into Python exceptions.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBool;

use crate::error::RandomError;
use crate::random::{Bound as NumericBound, NumericOptions};
use crate::rng::SeedValue;

/// Map a crate error onto the closest Python exception
pub fn to_py_err(err: RandomError) -> PyErr {
    match err {
        RandomError::CheckpointMismatch { .. } => PyRuntimeError::new_err(err.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Accept an `int` or a sequence of `int`
///
/// # Errors
/// Raises ValueError for anything else (strings, floats, bools, mixed
/// sequences).
pub fn extract_seed(value: &Bound<'_, PyAny>) -> PyResult<SeedValue> {
    if value.is_instance_of::<PyBool>() {
        return Err(to_py_err(RandomError::InvalidSeed(
            "expected an integer, got bool".to_string(),
        )));
    }
    if let Ok(single) = value.extract::<i64>() {
        return Ok(SeedValue::Int(single));
    }
    if let Ok(keys) = value.extract::<Vec<i64>>() {
        return Ok(SeedValue::Array(keys));
    }
    let type_name = value
        .get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    Err(to_py_err(RandomError::InvalidSeed(format!(
        "expected an integer or a sequence of integers, got {}",
        type_name
    ))))
}

/// Build numeric options from optional keyword arguments
pub fn numeric_bound(max: Option<f64>, min: Option<f64>, precision: Option<f64>) -> NumericBound {
    NumericBound::Options(NumericOptions {
        min,
        max,
        precision,
    })
}
