//! Core Bloom Filter implementation
//!
//! INVARIANTS:
//! - Bits are only ever set, never cleared
//! - No false negatives: if inserted, `contains()` MUST return true
//! - A one-byte vector holding `0xFF` is saturated and matches everything

use bitvec::prelude::*;

use super::flags::BloomFlags;
use super::hash_functions::compute_hash_positions;
use super::parameters::{
    calculate_fpr, ideal_hash_count, ideal_size, MAX_FILTER_SIZE_BYTES, MAX_HASH_FUNCS,
};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
///
/// The vector is addressed LSB-first within each byte, so `as_bytes()` is
/// exactly what goes on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Number of hash rounds (k)
    hash_functions: u32,
    /// Salt mixed into every round's seed
    tweak: u32,
    /// Raw update policy byte for the serving peer, never interpreted here
    flags: u8,
    /// Elements inserted through this handle (n)
    elements_inserted: usize,
}

fn validate_dimensions(size_bytes: usize, hash_functions: u32) -> Result<(), FilterError> {
    if size_bytes == 0 {
        return Err(FilterError::InvalidParameter(
            "vector length cannot be 0".to_string(),
        ));
    }
    if size_bytes > MAX_FILTER_SIZE_BYTES {
        return Err(FilterError::FilterTooLarge {
            size: size_bytes,
            max: MAX_FILTER_SIZE_BYTES,
        });
    }
    if hash_functions == 0 {
        return Err(FilterError::InvalidParameter(
            "hash function count cannot be 0".to_string(),
        ));
    }
    if hash_functions > MAX_HASH_FUNCS {
        return Err(FilterError::TooManyHashFunctions {
            count: hash_functions,
            max: MAX_HASH_FUNCS,
        });
    }
    Ok(())
}

impl BloomFilter {
    /// Create an empty filter.
    ///
    /// # Arguments
    /// * `size_bytes` - Vector length in bytes
    /// * `hash_functions` - Number of hash rounds (k)
    /// * `tweak` - Salt added to every round's seed
    /// * `flags` - Update policy carried for the peer
    ///
    /// # Errors
    /// `InvalidParameter` for a zero length or zero `k`, `FilterTooLarge` /
    /// `TooManyHashFunctions` above the protocol maxima.
    pub fn new(
        size_bytes: usize,
        hash_functions: u32,
        tweak: u32,
        flags: BloomFlags,
    ) -> Result<Self, FilterError> {
        validate_dimensions(size_bytes, hash_functions)?;
        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; size_bytes * 8],
            hash_functions,
            tweak,
            flags: flags.as_byte(),
            elements_inserted: 0,
        })
    }

    /// Create a filter sized for `expected_elements` at `target_fpr`.
    pub fn for_elements(
        expected_elements: usize,
        target_fpr: f64,
        tweak: u32,
        flags: BloomFlags,
    ) -> Result<Self, FilterError> {
        let size_bytes = ideal_size(expected_elements, target_fpr)?;
        let hash_functions = ideal_hash_count(size_bytes * 8, expected_elements)?;
        Self::new(size_bytes, hash_functions, tweak, flags)
    }

    /// Rebuild a filter from its raw vector, e.g. one received from a peer.
    ///
    /// `flags` is the policy byte exactly as it arrived; it is kept verbatim.
    pub fn from_raw(
        vector: Vec<u8>,
        hash_functions: u32,
        tweak: u32,
        flags: u8,
    ) -> Result<Self, FilterError> {
        validate_dimensions(vector.len(), hash_functions)?;
        Ok(Self {
            bits: BitVec::from_vec(vector),
            hash_functions,
            tweak,
            flags,
            elements_inserted: 0,
        })
    }

    /// The saturated filter: one byte, all ones. Matches every element.
    pub fn match_all() -> Self {
        Self {
            bits: BitVec::from_vec(vec![0xFF]),
            hash_functions: 1,
            tweak: 0,
            flags: BloomFlags::None.as_byte(),
            elements_inserted: 0,
        }
    }

    /// True when the vector is a single `0xFF` byte.
    pub fn is_saturated(&self) -> bool {
        self.bits.as_raw_slice() == [0xFF]
    }

    /// Insert an element into the filter
    ///
    /// After insertion, `contains(element)` is guaranteed to return true.
    /// A saturated filter already matches everything, so nothing is hashed.
    pub fn insert(&mut self, element: &[u8]) {
        if self.is_saturated() {
            return;
        }
        let size_bits = self.bits.len();
        for pos in compute_hash_positions(element, self.hash_functions, size_bits, self.tweak) {
            self.bits.set(pos, true);
        }
        self.elements_inserted += 1;
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set (never false negative)
    pub fn contains(&self, element: &[u8]) -> bool {
        if self.is_saturated() {
            return true;
        }
        compute_hash_positions(element, self.hash_functions, self.bits.len(), self.tweak)
            .all(|pos| self.bits[pos])
    }

    /// Raw vector bytes, LSB-first bit order.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Vector length in bytes.
    pub fn len(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    /// Always false: construction rejects empty vectors.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Vector length in bits (m).
    pub fn size_bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash rounds (k).
    pub fn hash_functions(&self) -> u32 {
        self.hash_functions
    }

    /// Seed salt.
    pub fn tweak(&self) -> u32 {
        self.tweak
    }

    /// Update policy byte as carried.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Update policy as the serving peer reads it.
    pub fn policy(&self) -> BloomFlags {
        BloomFlags::from_byte(self.flags)
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Elements inserted through this handle.
    pub fn elements_inserted(&self) -> usize {
        self.elements_inserted
    }

    /// Estimated false positive rate after the inserts seen so far.
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_false_positive_rate(&self) -> f64 {
        if self.is_saturated() {
            return 1.0;
        }
        calculate_fpr(self.size_bits(), self.elements_inserted, self.hash_functions)
    }
}
