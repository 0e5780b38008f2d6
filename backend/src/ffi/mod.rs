//! Python bindings
//!
//! Thin PyO3 layer over [`Faker`](crate::Faker). Only compiled with the
//! `pyo3` feature.

pub mod faker;
pub mod types;
