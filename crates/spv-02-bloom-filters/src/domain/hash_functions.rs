//! Hash functions for the Bloom filter
//!
//! Round `i` hashes the element with MurmurHash3 x86_32 seeded by
//! `i * BLOOM_SEED_MULTIPLIER + tweak` (wrapping), then reduces modulo the
//! vector's bit count. Changing the tweak moves every bit, which is how a
//! client rotates filters without changing its watch list.

use spv_crypto::murmur3_32;

/// Per-round seed multiplier.
pub const BLOOM_SEED_MULTIPLIER: u32 = 0xFBA4C795;

/// Seed for hash round `round`.
pub fn round_seed(round: u32, tweak: u32) -> u32 {
    round.wrapping_mul(BLOOM_SEED_MULTIPLIER).wrapping_add(tweak)
}

/// Bit index selected by hash round `round` in a vector of `size_bits` bits.
pub fn bit_index(element: &[u8], round: u32, tweak: u32, size_bits: usize) -> usize {
    let hash = murmur3_32(element, round_seed(round, tweak));
    (u64::from(hash) % size_bits as u64) as usize
}

/// Lazily compute the `k` bit positions for an element.
///
/// Lazy so that membership tests stop at the first clear bit.
pub fn compute_hash_positions(
    element: &[u8],
    k: u32,
    size_bits: usize,
    tweak: u32,
) -> impl Iterator<Item = usize> + '_ {
    (0..k).map(move |round| bit_index(element, round, tweak, size_bits))
}
