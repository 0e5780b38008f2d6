//! Fixed-alphabet strings
//!
//! Each character is one independent `array_element` draw over its alphabet.

use super::options::AlphaOptions;
use crate::rng::RandomState;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const HEX_DIGITS: &[u8] = b"0123456789abcdef";

/// Letters from `[a-z]`, or `[A-Z]` with `upcase`
///
/// # Example
/// ```
/// use puregen_core_rs::random::{self, AlphaOptions};
/// use puregen_core_rs::RandomState;
///
/// let mut state = RandomState::new(100_i64).unwrap();
/// let word = random::alpha(&mut state, AlphaOptions::from(5_usize));
/// assert_eq!(word.len(), 5);
/// ```
pub fn alpha(state: &mut RandomState, options: impl Into<AlphaOptions>) -> String {
    let options = options.into();
    let alphabet = if options.upcase { UPPERCASE } else { LOWERCASE };
    draw_from(state, alphabet, options.count)
}

/// Characters from `[0-9a-z]`
pub fn alpha_numeric(state: &mut RandomState, count: usize) -> String {
    draw_from(state, ALPHANUMERIC, count)
}

/// `"0x"` followed by `count` lowercase hex digits
pub fn hexa_decimal(state: &mut RandomState, count: usize) -> String {
    let mut out = String::with_capacity(count + 2);
    out.push_str("0x");
    out.push_str(&draw_from(state, HEX_DIGITS, count));
    out
}

fn draw_from(state: &mut RandomState, alphabet: &[u8], count: usize) -> String {
    (0..count)
        .map(|_| char::from(alphabet[state.pick_index(alphabet.len() - 1)]))
        .collect()
}
