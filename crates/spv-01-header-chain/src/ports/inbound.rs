//! # Inbound Ports
//!
//! API trait defining what the header sync service can do.

use async_trait::async_trait;

use crate::algorithms::BatchOutcome;
use crate::domain::{BlockHash, BlockHeader, ChainTip, SyncError};

/// Header sync API - inbound port.
#[async_trait]
pub trait HeaderSyncApi: Send + Sync {
    /// Ask the peer for headers following our current head.
    async fn request_headers(&self) -> Result<(), SyncError>;

    /// Apply a `headers` message received from the peer.
    async fn process_headers(&mut self, headers: Vec<BlockHeader>)
        -> Result<BatchOutcome, SyncError>;

    /// Locator for the current head.
    fn create_locator(&self) -> Vec<BlockHash>;

    /// Get current chain tip.
    fn get_chain_tip(&self) -> ChainTip;

    /// True once the peer has answered with an empty batch.
    fn is_synced(&self) -> bool;
}
