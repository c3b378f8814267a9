//! # MurmurHash3 (x86, 32-bit)
//!
//! The seeded mixing hash behind BIP37 Bloom filters. Every filter hash round
//! calls this with a different seed; see `spv-02-bloom-filters`.

use std::io::Cursor;

/// Hash `data` with MurmurHash3 x86_32 under `seed`.
///
/// Defined for every input length, including zero.
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut cursor = Cursor::new(data);
    // Reading from an in-memory cursor cannot fail
    murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0)
}
