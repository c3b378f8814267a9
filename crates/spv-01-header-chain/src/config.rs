//! # Header Sync Configuration
//!
//! Configuration for the header sync service.

use serde::{Deserialize, Serialize};

use crate::domain::{BlockHash, BlockHeader};

/// Most headers a single `headers` message may carry.
pub const MAX_HEADERS_PER_MESSAGE: usize = 2000;

/// Header sync configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeaderSyncConfig {
    /// Genesis anchor of the chain being followed.
    pub genesis: BlockHash,

    /// Batches larger than this are rejected before touching the index.
    pub max_headers_per_batch: usize,

    /// Send the next `getheaders` after every non-empty batch.
    pub request_after_batch: bool,
}

impl Default for HeaderSyncConfig {
    fn default() -> Self {
        Self {
            genesis: BlockHeader::mainnet_genesis().block_hash(),
            max_headers_per_batch: MAX_HEADERS_PER_MESSAGE,
            request_after_batch: true,
        }
    }
}

impl HeaderSyncConfig {
    /// Create a config for testing (synthetic genesis, small batches).
    pub fn for_testing() -> Self {
        Self {
            genesis: BlockHash::from_bytes([0x0f; 32]),
            max_headers_per_batch: 100,
            request_after_batch: true,
        }
    }
}
