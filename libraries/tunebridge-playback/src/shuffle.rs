//! Shuffle selection
//!
//! Shuffle never reorders the playlist; it only picks the next index.

use rand::Rng;

/// Pick a uniformly random index in `0..len`, excluding `current`
///
/// With a single-song playlist there is no other index, so `current` is
/// returned. Returns `None` when `len == 0`.
pub fn pick_random_index<R: Rng + ?Sized>(len: usize, current: usize, rng: &mut R) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        _ if current >= len => Some(rng.gen_range(0..len)),
        _ => {
            // Draw from len - 1 slots and skip over `current`
            let pick = rng.gen_range(0..len - 1);
            Some(if pick >= current { pick + 1 } else { pick })
        }
    }
}
