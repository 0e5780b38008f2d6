//! Distribution layer
//!
//! Stateless functions that turn the word stream of a [`RandomState`]
//! into bounded numbers, choices, subsets, strings and UUIDs. None of them
//! keep state of their own; calling the same sequence of functions on two
//! identically seeded states yields identical values.
//!
//! [`RandomState`]: crate::rng::RandomState

mod identifier;
mod numeric;
mod options;
mod sampling;
mod strings;

pub use identifier::uuid;
pub use numeric::{boolean, float, integer, number};
pub use options::{
    decimal_digits, round_to, AlphaOptions, Bound, NumericOptions, NumericRange, DEFAULT_MAX,
    FLOAT_PRECISION, INTEGER_PRECISION,
};
pub use sampling::{array_element, array_elements, object_entry, object_key, object_value};
pub use strings::{alpha, alpha_numeric, hexa_decimal};
