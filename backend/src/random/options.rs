//! Option types for the distribution functions
//!
//! Callers pass either a bare maximum or a [`NumericOptions`] value. Both
//! are normalized once, at the API boundary, into a [`NumericRange`] before
//! any arithmetic happens. Normalization works on a copy; the caller's
//! options are never touched.

use crate::error::RandomError;
use serde::{Deserialize, Serialize};

/// Upper bound used when none is given
pub const DEFAULT_MAX: f64 = 99_999.0;

/// Default step for `number`
pub const INTEGER_PRECISION: f64 = 1.0;

/// Default step for `float`
pub const FLOAT_PRECISION: f64 = 0.01;

/// Largest number of grid steps a range may have (2^53)
const MAX_STEPS: f64 = 9_007_199_254_740_992.0;

/// Decimal places considered when inferring a precision's digit count
const MAX_DIGITS: i32 = 15;

/// Bounds and granularity for a numeric draw; every field is optional
///
/// # Example
/// ```
/// use puregen_core_rs::random::NumericOptions;
///
/// let opts = NumericOptions::range(0.0, 1.5).with_precision(0.5);
/// assert_eq!(opts.precision, Some(0.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub precision: Option<f64>,
}

impl NumericOptions {
    /// Closed range `[min, max]`
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            precision: None,
        }
    }

    /// Only an upper bound
    pub fn max(max: f64) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }

    /// Set the grid step
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// Either a bare maximum or full options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Max(f64),
    Options(NumericOptions),
}

impl Default for Bound {
    fn default() -> Self {
        Bound::Options(NumericOptions::default())
    }
}

impl From<f64> for Bound {
    fn from(max: f64) -> Self {
        Bound::Max(max)
    }
}

impl From<i64> for Bound {
    fn from(max: i64) -> Self {
        Bound::Max(max as f64)
    }
}

impl From<i32> for Bound {
    fn from(max: i32) -> Self {
        Bound::Max(f64::from(max))
    }
}

impl From<NumericOptions> for Bound {
    fn from(options: NumericOptions) -> Self {
        Bound::Options(options)
    }
}

impl From<&NumericOptions> for Bound {
    fn from(options: &NumericOptions) -> Self {
        Bound::Options(*options)
    }
}

/// Canonical, validated form of a [`Bound`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub precision: f64,
    /// Decimal places results are rounded to
    pub digits: i32,
    /// Largest `k` such that `min + k * precision` stays within `max`
    pub steps: i64,
}

impl Bound {
    /// Resolve defaults and validate
    ///
    /// `min` defaults to 0, or to `max` when only a negative `max` is
    /// given. `max` defaults to [`DEFAULT_MAX`].
    pub fn normalize(&self, default_precision: f64) -> Result<NumericRange, RandomError> {
        let options = match *self {
            Bound::Max(max) => NumericOptions::max(max),
            Bound::Options(options) => options,
        };

        let max = options.max.unwrap_or(DEFAULT_MAX);
        let min = options.min.unwrap_or(if max < 0.0 { max } else { 0.0 });
        let precision = options.precision.unwrap_or(default_precision);

        for value in [min, max] {
            if !value.is_finite() {
                return Err(RandomError::NonFiniteBound { value });
            }
        }
        if !precision.is_finite() || precision <= 0.0 {
            return Err(RandomError::InvalidPrecision { precision });
        }
        if max < min {
            return Err(RandomError::InvertedBounds { min, max });
        }

        let range = max - min;
        let raw_steps = (range / precision).round();
        if raw_steps > MAX_STEPS {
            return Err(RandomError::PrecisionTooFine { precision, range });
        }

        let digits = decimal_digits(precision).max(decimal_digits(min));
        let mut steps = raw_steps as i64;
        // Rounding up may overshoot max; pull the top of the grid back in
        while steps > 0 && round_to(min + steps as f64 * precision, digits) > max {
            steps -= 1;
        }

        Ok(NumericRange {
            min,
            max,
            precision,
            digits,
            steps,
        })
    }
}

impl NumericRange {
    /// Value of grid point `k`, rounded to the range's digits
    ///
    /// Rounding can cross a bound that is not a short decimal (e.g.
    /// `0.1 + 0.2`), so the result is pinned back into `[min, max]`.
    pub fn value_at(&self, k: i64) -> f64 {
        round_to(self.min + k as f64 * self.precision, self.digits)
            .max(self.min)
            .min(self.max)
    }
}

/// Decimal places needed to write `value` exactly (e.g. 0.01 → 2)
pub fn decimal_digits(value: f64) -> i32 {
    (0..MAX_DIGITS)
        .find(|&digits| {
            let scaled = value * 10f64.powi(digits);
            (scaled.round() - scaled).abs() <= 1e-9
        })
        .unwrap_or(MAX_DIGITS)
}

/// Round half away from zero to `digits` decimal places
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Options for `alpha`
///
/// # Example
/// ```
/// use puregen_core_rs::random::AlphaOptions;
///
/// let opts = AlphaOptions::from(5_usize).upcase();
/// assert_eq!(opts.count, 5);
/// assert!(opts.upcase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaOptions {
    /// Number of letters
    pub count: usize,
    /// Use `[A-Z]` instead of `[a-z]`
    pub upcase: bool,
}

impl Default for AlphaOptions {
    fn default() -> Self {
        Self {
            count: 1,
            upcase: false,
        }
    }
}

impl AlphaOptions {
    pub fn upcase(mut self) -> Self {
        self.upcase = true;
        self
    }
}

impl From<usize> for AlphaOptions {
    fn from(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}
