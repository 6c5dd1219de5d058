//! Secure random primitives backed by the OS CSPRNG.

use rand::RngCore;
use rand::rngs::OsRng;

/// Uniformly distributed index in `[0, max)` from a 32-bit secure value.
/// Returns 0 for `max == 0` so callers never see an invalid index.
///
/// Reduction is a plain modulo, so pool sizes that do not evenly divide
/// 2^32 carry a small bias. Accepted tradeoff, kept as documented behavior
/// rather than corrected with rejection sampling.
#[inline]
pub fn secure_index(max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    OsRng.next_u32() as usize % max
}

/// Pick one character from an ASCII pool.
#[inline]
pub fn secure_pick(pool: &str) -> char {
    debug_assert!(pool.is_ascii() && !pool.is_empty());
    pool.as_bytes()[secure_index(pool.len())] as char
}

/// In-place Fisher-Yates shuffle, last index down to 1, each position
/// swapped with a secure-random earlier-or-equal position.
pub fn secure_shuffle(buf: &mut [char]) {
    for i in (1..buf.len()).rev() {
        let j = secure_index(i + 1);
        buf.swap(i, j);
    }
}
