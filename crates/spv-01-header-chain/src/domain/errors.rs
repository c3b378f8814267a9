//! # Domain Errors
//!
//! Error types for the header chain and the sync service.

use thiserror::Error;

use super::value_objects::BlockHash;

/// Header chain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The header's predecessor is not indexed. Nothing was stored; the
    /// caller may fetch the missing ancestor and deliver this header again.
    #[error("Unknown parent {prev_block} for header {hash}")]
    UnknownParent {
        /// Identity of the rejected header
        hash: BlockHash,
        /// Predecessor it names
        prev_block: BlockHash,
    },

    /// Serialized header is not exactly 80 bytes.
    #[error("Invalid header length: {len} bytes (expected 80)")]
    InvalidHeaderLength {
        /// Length received
        len: usize,
    },

    /// Hash string is not 64 hex characters.
    #[error("Invalid block hash: {0}")]
    InvalidHash(String),
}

/// Header sync service errors.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Header chain rejected input.
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    /// Peer sent more headers than one message may carry.
    #[error("Header batch too large: {count} > {max}")]
    BatchTooLarge {
        /// Headers received
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// The wire layer failed to deliver a request.
    #[error("Network error: {0}")]
    Network(String),
}
