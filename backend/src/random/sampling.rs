//! Choosing from sequences
//!
//! Elements are opaque: only indices are drawn.

use crate::error::RandomError;
use crate::rng::RandomState;
use std::collections::BTreeMap;

/// Uniformly pick one element
///
/// # Errors
/// [`RandomError::EmptyInput`] if `seq` is empty.
pub fn array_element<'a, T>(state: &mut RandomState, seq: &'a [T]) -> Result<&'a T, RandomError> {
    if seq.is_empty() {
        return Err(RandomError::EmptyInput);
    }
    let index = state.pick_index(seq.len() - 1);
    Ok(&seq[index])
}

/// Sample a subset without replacement
///
/// With `count` omitted the subset size is itself drawn from
/// `[1, seq.len()]`. A requested count is clamped to `seq.len()`. An empty
/// input yields an empty subset and draws nothing.
///
/// Runs a partial Fisher-Yates shuffle from the back of a copy and returns
/// the shuffled tail.
///
/// # Example
/// ```
/// use puregen_core_rs::random;
/// use puregen_core_rs::RandomState;
///
/// let mut state = RandomState::new(7_i64).unwrap();
/// let words = ["hello", "to", "you", "my", "friend"];
/// let picked = random::array_elements(&mut state, &words, Some(3));
/// assert_eq!(picked.len(), 3);
/// ```
pub fn array_elements<T: Clone>(state: &mut RandomState, seq: &[T], count: Option<usize>) -> Vec<T> {
    let len = seq.len();
    if len == 0 {
        return Vec::new();
    }

    let count = match count {
        Some(count) => count.min(len),
        None => 1 + state.pick_index(len - 1),
    };

    let mut shuffled = seq.to_vec();
    for i in (len - count..len).rev() {
        let j = state.pick_index(i);
        shuffled.swap(i, j);
    }
    shuffled.split_off(len - count)
}

/// Pick a random entry of an ordered map
///
/// Keys are visited in map order, which keeps the pick reproducible.
pub fn object_entry<'a, K, V>(
    state: &mut RandomState,
    map: &'a BTreeMap<K, V>,
) -> Result<(&'a K, &'a V), RandomError> {
    if map.is_empty() {
        return Err(RandomError::EmptyInput);
    }
    let index = state.pick_index(map.len() - 1);
    map.iter().nth(index).ok_or(RandomError::EmptyInput)
}

/// Random key of `map`
pub fn object_key<'a, K, V>(state: &mut RandomState, map: &'a BTreeMap<K, V>) -> Result<&'a K, RandomError> {
    object_entry(state, map).map(|(key, _)| key)
}

/// Value stored under a random key of `map`
pub fn object_value<'a, K, V>(
    state: &mut RandomState,
    map: &'a BTreeMap<K, V>,
) -> Result<&'a V, RandomError> {
    object_entry(state, map).map(|(_, value)| value)
}
