//! PyO3 wrapper for Faker
//!
//! # Example (from Python)
//!
//! ```python
//! from puregen._core import Faker
//!
//! faker = Faker(100)
//! faker.number(max=10)
//! faker.uuid()
//! checkpoint = faker.checkpoint()
//! ```

use pyo3::prelude::*;

use super::types::{extract_seed, numeric_bound, to_py_err};
use crate::checkpoint::StateCheckpoint;
use crate::config::FakerConfig;
use crate::faker::Faker as RustFaker;
use crate::random::AlphaOptions;

/// Python wrapper for an independent Rust Faker stream
#[pyclass(name = "Faker")]
pub struct PyFaker {
    inner: RustFaker,
}

#[pymethods]
impl PyFaker {
    /// Create a generator; without a seed the reference default is used
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let inner = match seed {
            Some(value) => RustFaker::new(extract_seed(value)?).map_err(to_py_err)?,
            None => RustFaker::default(),
        };
        Ok(PyFaker { inner })
    }

    /// Create a generator from a JSON configuration document
    #[staticmethod]
    fn from_config_json(json: &str) -> PyResult<Self> {
        let config = FakerConfig::from_json(json).map_err(to_py_err)?;
        let inner = RustFaker::from_config(&config).map_err(to_py_err)?;
        Ok(PyFaker { inner })
    }

    fn seed(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let seed = extract_seed(value)?;
        self.inner.seed(seed).map_err(to_py_err)
    }

    fn seed_array(&mut self, keys: Vec<i64>) -> PyResult<()> {
        self.inner.seed_from_array(&keys).map_err(to_py_err)
    }

    #[pyo3(signature = (max=None, min=None, precision=None))]
    fn number(&mut self, max: Option<f64>, min: Option<f64>, precision: Option<f64>) -> PyResult<f64> {
        self.inner
            .number(numeric_bound(max, min, precision))
            .map_err(to_py_err)
    }

    #[pyo3(signature = (max=None, min=None, precision=None))]
    fn float(&mut self, max: Option<f64>, min: Option<f64>, precision: Option<f64>) -> PyResult<f64> {
        self.inner
            .float(numeric_bound(max, min, precision))
            .map_err(to_py_err)
    }

    fn integer(&mut self, min: i64, max: i64) -> PyResult<i64> {
        self.inner.integer(min, max).map_err(to_py_err)
    }

    fn boolean(&mut self) -> bool {
        self.inner.boolean()
    }

    fn array_element(&mut self, py: Python<'_>, seq: Vec<PyObject>) -> PyResult<PyObject> {
        let picked = self.inner.array_element(&seq).map_err(to_py_err)?;
        Ok(picked.clone_ref(py))
    }

    /// Subset without replacement; indices are sampled so elements need not
    /// be cloneable on the Rust side
    #[pyo3(signature = (seq, count=None))]
    fn array_elements(&mut self, py: Python<'_>, seq: Vec<PyObject>, count: Option<usize>) -> Vec<PyObject> {
        let indices: Vec<usize> = (0..seq.len()).collect();
        self.inner
            .array_elements(&indices, count)
            .into_iter()
            .map(|i| seq[i].clone_ref(py))
            .collect()
    }

    #[pyo3(signature = (count=1, upcase=false))]
    fn alpha(&mut self, count: usize, upcase: bool) -> String {
        self.inner.alpha(AlphaOptions { count, upcase })
    }

    #[pyo3(signature = (count=1))]
    fn alpha_numeric(&mut self, count: usize) -> String {
        self.inner.alpha_numeric(count)
    }

    #[pyo3(signature = (count=1))]
    fn hexa_decimal(&mut self, count: usize) -> String {
        self.inner.hexa_decimal(count)
    }

    fn uuid(&mut self) -> String {
        self.inner.uuid().to_string()
    }

    /// Current position as a JSON string
    fn checkpoint(&self) -> PyResult<String> {
        self.inner.checkpoint().to_json().map_err(to_py_err)
    }

    /// Return to a position saved by `checkpoint`
    fn restore(&mut self, json: &str) -> PyResult<()> {
        let checkpoint = StateCheckpoint::from_json(json).map_err(to_py_err)?;
        self.inner.restore(&checkpoint).map_err(to_py_err)
    }
}
