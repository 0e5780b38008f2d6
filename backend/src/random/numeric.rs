//! Bounded numeric draws
//!
//! A range `[min, max]` with step `precision` defines the closed grid
//! `min, min + precision, ..., min + steps * precision`. One engine draw
//! picks a grid point uniformly; the result is rounded to the decimal digits
//! of the step so `0.1 + 0.2`-style drift never leaks out.

use super::options::{Bound, FLOAT_PRECISION, INTEGER_PRECISION};
use crate::error::RandomError;
use crate::rng::RandomState;

/// Draw a number from `bound` with default step 1
///
/// # Example
/// ```
/// use puregen_core_rs::random::{self, NumericOptions};
/// use puregen_core_rs::RandomState;
///
/// let mut state = RandomState::new(42_i64).unwrap();
/// let opts = NumericOptions::range(0.0, 1.5).with_precision(0.5);
/// let value = random::number(&mut state, opts).unwrap();
/// assert!([0.0, 0.5, 1.0, 1.5].contains(&value));
/// ```
pub fn number(state: &mut RandomState, bound: impl Into<Bound>) -> Result<f64, RandomError> {
    draw(state, bound.into(), INTEGER_PRECISION)
}

/// Draw a number from `bound` with default step 0.01
pub fn float(state: &mut RandomState, bound: impl Into<Bound>) -> Result<f64, RandomError> {
    draw(state, bound.into(), FLOAT_PRECISION)
}

/// Integer in `[min, max]`
///
/// Same draw and same value as `number` over the same integral bounds.
pub fn integer(state: &mut RandomState, min: i64, max: i64) -> Result<i64, RandomError> {
    state.next_in_range(min, max)
}

/// Fair coin: `number({min: 0, max: 1, precision: 1}) == 1`
pub fn boolean(state: &mut RandomState) -> bool {
    state.pick_index(1) == 1
}

fn draw(state: &mut RandomState, bound: Bound, default_precision: f64) -> Result<f64, RandomError> {
    let range = bound.normalize(default_precision)?;
    // A degenerate range still consumes exactly one draw
    let k = state.next_in_range(0, range.steps)?;
    Ok(range.value_at(k))
}
