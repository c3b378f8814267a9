//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = -n*ln(p) / (ln(2)^2)  -- optimal bits
//! - k = (m/n) * ln(2)         -- optimal hash functions
//! - FPR = (1 - e^(-kn/m))^k   -- expected false positive rate
//!
//! Results truncate toward zero, as peers compute them, and are clamped to
//! the protocol maxima below.

use std::f64::consts::LN_2;

use crate::error::FilterError;

/// Largest filter a peer will accept, in bytes.
///
/// Enough for 20,000 items at < 0.1% or 10,000 items at < 0.0001%.
pub const MAX_FILTER_SIZE_BYTES: usize = 36_000;

/// Most hash rounds a peer will run per element.
pub const MAX_HASH_FUNCS: u32 = 50;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Vector length in bytes
    pub size_bytes: usize,
    /// Number of hash functions
    pub hash_functions: u32,
    /// Expected false positive rate once `n` elements are inserted
    pub expected_fpr: f64,
}

impl BloomFilterParams {
    /// Vector length in bits.
    pub fn size_bits(&self) -> usize {
        self.size_bytes * 8
    }
}

pub(crate) fn validate_fpr(fpr: f64) -> Result<(), FilterError> {
    // Also rejects NaN
    if !(fpr > 0.0 && fpr < 1.0) {
        return Err(FilterError::InvalidFalsePositiveRate { fpr });
    }
    Ok(())
}

/// Ideal vector length in bytes for `n` elements at false positive rate `fpr`.
///
/// Clamped to `[1, MAX_FILTER_SIZE_BYTES]`.
///
/// # Errors
/// - `InvalidFalsePositiveRate` unless `0 < fpr < 1`
/// - `InvalidParameter` if `n == 0`
pub fn ideal_size(n: usize, fpr: f64) -> Result<usize, FilterError> {
    validate_fpr(fpr)?;
    if n == 0 {
        return Err(FilterError::InvalidParameter(
            "target element count cannot be 0".to_string(),
        ));
    }

    let bits = -(n as f64) * fpr.ln() / (LN_2 * LN_2);
    let bytes = (bits / 8.0).min(MAX_FILTER_SIZE_BYTES as f64) as usize;
    Ok(bytes.max(1))
}

/// Ideal number of hash functions for a vector of `size_bits` bits holding
/// `n` elements.
///
/// Clamped to `[1, MAX_HASH_FUNCS]`.
///
/// # Errors
/// - `InvalidParameter` if `size_bits == 0` or `n == 0`
pub fn ideal_hash_count(size_bits: usize, n: usize) -> Result<u32, FilterError> {
    if size_bits == 0 {
        return Err(FilterError::InvalidParameter(
            "vector size cannot be 0".to_string(),
        ));
    }
    if n == 0 {
        return Err(FilterError::InvalidParameter(
            "target element count cannot be 0".to_string(),
        ));
    }

    let k = (size_bits as f64 / n as f64 * LN_2).min(MAX_HASH_FUNCS as f64) as u32;
    Ok(k.max(1))
}

/// Calculate size and hash count together, plus the resulting FPR.
pub fn calculate_optimal_parameters(
    num_elements: usize,
    target_fpr: f64,
) -> Result<BloomFilterParams, FilterError> {
    let size_bytes = ideal_size(num_elements, target_fpr)?;
    let hash_functions = ideal_hash_count(size_bytes * 8, num_elements)?;
    let expected_fpr = calculate_fpr(size_bytes * 8, num_elements, hash_functions);

    Ok(BloomFilterParams {
        size_bytes,
        hash_functions,
        expected_fpr,
    })
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: u32) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
