//! Error types for the Bloom filter subsystem

use thiserror::Error;

/// Errors raised when sizing or constructing a filter.
///
/// All variants are recoverable: the caller picks new parameters and retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// False positive rate outside the open interval (0, 1), or NaN.
    #[error("Invalid false positive rate: {fpr} (must be strictly between 0 and 1)")]
    InvalidFalsePositiveRate {
        /// Rejected rate
        fpr: f64,
    },

    /// Zero element count, zero vector length or zero hash functions.
    #[error("Invalid filter parameters: {0}")]
    InvalidParameter(String),

    /// Vector longer than the protocol allows.
    #[error("Filter size exceeds maximum: {size} > {max} bytes")]
    FilterTooLarge {
        /// Requested length in bytes
        size: usize,
        /// Maximum length in bytes
        max: usize,
    },

    /// More hash rounds than the protocol allows.
    #[error("Too many hash functions: {count} > {max}")]
    TooManyHashFunctions {
        /// Requested hash function count
        count: u32,
        /// Maximum hash function count
        max: u32,
    },
}
