//! # Header Sync Service
//!
//! Application service driving one `getheaders`/`headers` session with a peer.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use spv_telemetry::{log_header_event, log_peer_event, sync_span};
use tracing::Instrument;

use crate::algorithms::{apply_headers, BatchOutcome};
use crate::config::HeaderSyncConfig;
use crate::domain::{BlockHash, BlockHeader, ChainIndex, ChainTip, SyncError};
use crate::ports::{HeaderRequestSink, HeaderSyncApi};

/// Running totals for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStats {
    /// Batches processed.
    pub batches: u64,
    /// Headers that created new nodes.
    pub accepted: u64,
    /// Headers already indexed.
    pub duplicates: u64,
    /// Headers rejected for an unknown parent.
    pub orphaned: u64,
    /// `getheaders` requests sent.
    pub requests_sent: u64,
}

/// Header Sync Service - owns the chain index for one peer session.
pub struct HeaderSyncService<S: HeaderRequestSink> {
    /// Configuration.
    config: HeaderSyncConfig,
    /// Header tree.
    index: ChainIndex,
    /// Peer connection.
    sink: Arc<S>,
    /// Peer answered with an empty batch.
    synced: bool,
    /// Session totals.
    stats: SyncStats,
}

impl<S: HeaderRequestSink> HeaderSyncService<S> {
    /// Create a service with an index holding only the configured genesis.
    pub fn new(config: HeaderSyncConfig, sink: Arc<S>) -> Self {
        let index = ChainIndex::new(config.genesis);
        Self::with_index(config, index, sink)
    }

    /// Create a service around an existing index.
    pub fn with_index(config: HeaderSyncConfig, index: ChainIndex, sink: Arc<S>) -> Self {
        Self {
            config,
            index,
            sink,
            synced: false,
            stats: SyncStats::default(),
        }
    }

    /// Get the chain index.
    pub fn index(&self) -> &ChainIndex {
        &self.index
    }

    /// Get the configuration.
    pub fn config(&self) -> &HeaderSyncConfig {
        &self.config
    }

    /// Get session totals.
    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    /// Get the peer connection.
    pub fn sink(&self) -> &Arc<S> {
        &self.sink
    }

    /// Give back the index, ending the session.
    pub fn into_index(self) -> ChainIndex {
        self.index
    }
}

#[async_trait]
impl<S: HeaderRequestSink + 'static> HeaderSyncApi for HeaderSyncService<S> {
    async fn request_headers(&self) -> Result<(), SyncError> {
        let locator = self.index.create_locator();
        log_peer_event!(
            debug,
            "Sending getheaders",
            self.sink.peer_id(),
            entries = locator.len(),
            head = %locator.first().copied().unwrap_or_default()
        );
        self.sink.send_get_headers(locator).await
    }

    async fn process_headers(
        &mut self,
        headers: Vec<BlockHeader>,
    ) -> Result<BatchOutcome, SyncError> {
        if headers.len() > self.config.max_headers_per_batch {
            return Err(SyncError::BatchTooLarge {
                count: headers.len(),
                max: self.config.max_headers_per_batch,
            });
        }

        let outcome = apply_headers(&mut self.index, &headers)?;

        for hash in &outcome.orphaned {
            log_peer_event!(
                warn,
                "Rejected header with unknown parent",
                self.sink.peer_id(),
                block_hash = %hash
            );
        }

        self.stats.batches += 1;
        self.stats.accepted += outcome.accepted as u64;
        self.stats.duplicates += outcome.duplicates as u64;
        self.stats.orphaned += outcome.orphaned.len() as u64;

        log_peer_event!(
            info,
            "Processed headers batch",
            self.sink.peer_id(),
            received = headers.len(),
            accepted = outcome.accepted,
            block_height = outcome.tip.height
        );

        if headers.is_empty() {
            self.synced = true;
            log_header_event!(info, "Header sync complete", outcome.tip.height, outcome.tip.hash);
        } else if self.config.request_after_batch {
            let span = sync_span!("getheaders", peer = self.sink.peer_id());
            self.request_headers().instrument(span).await?;
            self.stats.requests_sent += 1;
        }

        Ok(outcome)
    }

    fn create_locator(&self) -> Vec<BlockHash> {
        self.index.create_locator()
    }

    fn get_chain_tip(&self) -> ChainTip {
        self.index.tip()
    }

    fn is_synced(&self) -> bool {
        self.synced
    }
}
