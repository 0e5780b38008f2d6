//! RFC 4122 version 4 identifiers from the seeded stream

use crate::rng::RandomState;
use uuid::{Builder, Uuid};

/// Random UUID
///
/// Draws 16 bytes, one `next_in_range(0, 255)` each, then fixes the
/// version nibble of byte 6 to `4` and the top two bits of byte 8 to `10`.
///
/// # Example
/// ```
/// use puregen_core_rs::random;
/// use puregen_core_rs::RandomState;
///
/// let mut state = RandomState::new(100_i64).unwrap();
/// let id = random::uuid(&mut state);
/// assert_eq!(id.get_version_num(), 4);
/// ```
pub fn uuid(state: &mut RandomState) -> Uuid {
    let mut bytes = [0u8; 16];
    for byte in bytes.iter_mut() {
        *byte = state.pick_index(255) as u8;
    }
    Builder::from_random_bytes(bytes).into_uuid()
}
