//! # Header Sync Flow
//!
//! A `HeaderSyncService` talks to a simulated peer that holds its own
//! `ChainIndex` and answers each `getheaders` the way a full node does:
//! find the first locator entry on its best chain, then return up to one
//! batch of the headers that follow it.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use spv_01_header_chain::{
        BlockHash, BlockHeader, ChainIndex, HeaderSyncApi, HeaderSyncConfig, HeaderSyncService,
        MockPeer, SyncError,
    };
    use spv_telemetry::{init_logging, TelemetryConfig};

    use crate::fixtures::{hashes, header_chain};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Headers a full node holding `remote` would send for `locator`.
    fn serve_getheaders(remote: &ChainIndex, locator: &[BlockHash], max: usize) -> Vec<BlockHeader> {
        let start = remote
            .find_common_ancestor(locator)
            .map_or(0, |node| node.height() + 1);

        let mut best = remote.longest_path();
        best.reverse();
        best.iter()
            .skip(start as usize)
            .take(max)
            .filter_map(|node| node.header().copied())
            .collect()
    }

    fn remote_with(chains: &[&[BlockHeader]]) -> ChainIndex {
        let mut remote = ChainIndex::from_genesis_header(BlockHeader::mainnet_genesis());
        for chain in chains {
            for header in chain.iter() {
                remote.add_header(*header).unwrap();
            }
        }
        remote
    }

    fn test_config() -> HeaderSyncConfig {
        HeaderSyncConfig {
            max_headers_per_batch: 100,
            ..HeaderSyncConfig::default()
        }
    }

    /// Drive the request/response loop until the peer has nothing more.
    async fn run_session(
        service: &mut HeaderSyncService<MockPeer>,
        peer: &MockPeer,
        remote: &ChainIndex,
    ) -> Result<usize, SyncError> {
        let max = service.config().max_headers_per_batch;
        service.request_headers().await?;

        let mut rounds = 0;
        while !service.is_synced() {
            let locator = peer.last_locator().await.unwrap_or_default();
            let batch = serve_getheaders(remote, &locator, max);
            service.process_headers(batch).await?;
            rounds += 1;
        }
        Ok(rounds)
    }

    // =============================================================================
    // INTEGRATION TESTS: INITIAL SYNC
    // =============================================================================

    #[tokio::test]
    async fn test_initial_sync_in_batches() {
        let _ = init_logging(&TelemetryConfig::for_testing());

        let genesis = BlockHeader::mainnet_genesis();
        let chain = header_chain(&genesis, 250, 0);
        let remote = remote_with(&[&chain]);

        let peer = Arc::new(MockPeer::default());
        let mut service = HeaderSyncService::new(test_config(), Arc::clone(&peer));

        let rounds = run_session(&mut service, &peer, &remote).await.unwrap();

        // 100 + 100 + 50 + empty
        assert_eq!(rounds, 4);
        assert_eq!(service.get_chain_tip(), remote.tip());
        assert_eq!(service.stats().accepted, 250);
        assert_eq!(service.stats().orphaned, 0);
        assert_eq!(peer.request_count().await, 4);
    }

    #[tokio::test]
    async fn test_first_locator_is_genesis_only() {
        let peer = Arc::new(MockPeer::default());
        let service = HeaderSyncService::new(test_config(), Arc::clone(&peer));

        service.request_headers().await.unwrap();
        assert_eq!(
            peer.last_locator().await,
            Some(vec![BlockHeader::mainnet_genesis().block_hash()])
        );
    }

    // =============================================================================
    // INTEGRATION TESTS: FORKS
    // =============================================================================

    #[tokio::test]
    async fn test_resync_switches_to_taller_fork() {
        let genesis = BlockHeader::mainnet_genesis();
        let common = header_chain(&genesis, 10, 0);
        let ours = header_chain(&common[9], 10, 1);
        let theirs = header_chain(&common[9], 15, 2);

        // Local node followed the shorter branch first
        let local_source = remote_with(&[&common, &ours]);
        let peer = Arc::new(MockPeer::default());
        let mut service = HeaderSyncService::new(test_config(), Arc::clone(&peer));
        run_session(&mut service, &peer, &local_source).await.unwrap();
        assert_eq!(service.get_chain_tip().height, 20);

        // A new peer knows the taller branch
        let remote = remote_with(&[&common, &theirs]);
        let peer = Arc::new(MockPeer::default());
        let mut service =
            HeaderSyncService::with_index(test_config(), service.into_index(), Arc::clone(&peer));
        run_session(&mut service, &peer, &remote).await.unwrap();

        let index = service.index();
        assert_eq!(index.height(), 25);
        assert_eq!(index.head().hash(), theirs[14].block_hash());
        // Stale branch is kept, not removed
        assert!(index.contains(&ours[9].block_hash()));
        assert_eq!(index.leaves().count(), 2);
        // Only the new branch was downloaded
        assert_eq!(service.stats().accepted, 15);
        assert_eq!(service.stats().duplicates, 0);
    }

    #[tokio::test]
    async fn test_equal_height_fork_keeps_first_seen_head() {
        let genesis = BlockHeader::mainnet_genesis();
        let first = header_chain(&genesis, 5, 1);
        let second = header_chain(&genesis, 5, 2);

        let peer = Arc::new(MockPeer::default());
        let mut service = HeaderSyncService::new(test_config(), peer);
        service.process_headers(first.clone()).await.unwrap();
        service.process_headers(second).await.unwrap();

        assert_eq!(service.get_chain_tip().hash, first[4].block_hash());
    }

    // =============================================================================
    // INTEGRATION TESTS: BAD PEER INPUT
    // =============================================================================

    #[tokio::test]
    async fn test_out_of_order_batch_recovers_on_redelivery() {
        let genesis = BlockHeader::mainnet_genesis();
        let chain = header_chain(&genesis, 6, 0);
        let mut shuffled = chain.clone();
        shuffled.reverse();

        let peer = Arc::new(MockPeer::default());
        let mut service = HeaderSyncService::new(test_config(), peer);

        let outcome = service.process_headers(shuffled).await.unwrap();
        // Only the first child of genesis connects when delivered last
        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.orphaned.len(), 5);

        let outcome = service.process_headers(chain.clone()).await.unwrap();
        assert_eq!(outcome.accepted, 5);
        assert_eq!(outcome.duplicates, 1);
        assert_eq!(
            hashes(&chain).last().copied(),
            Some(service.get_chain_tip().hash)
        );
    }

    #[tokio::test]
    async fn test_oversized_batch_rejected_untouched() {
        let genesis = BlockHeader::mainnet_genesis();
        let chain = header_chain(&genesis, 101, 0);

        let peer = Arc::new(MockPeer::default());
        let mut service = HeaderSyncService::new(test_config(), Arc::clone(&peer));

        let err = service.process_headers(chain).await.unwrap_err();
        assert!(matches!(err, SyncError::BatchTooLarge { count: 101, max: 100 }));
        assert_eq!(service.index().len(), 1);
        assert_eq!(peer.request_count().await, 0);
    }

    #[tokio::test]
    async fn test_wire_decode_then_sync() {
        let genesis = BlockHeader::mainnet_genesis();
        let chain = header_chain(&genesis, 3, 0);
        let wire: Vec<[u8; 80]> = chain.iter().map(BlockHeader::consensus_encode).collect();

        let decoded: Vec<BlockHeader> = wire
            .iter()
            .map(|raw| BlockHeader::consensus_decode(raw))
            .collect::<Result<_, _>>()
            .unwrap();

        let peer = Arc::new(MockPeer::default());
        let mut service = HeaderSyncService::new(test_config(), peer);
        service.process_headers(decoded).await.unwrap();
        assert_eq!(service.get_chain_tip().hash, chain[2].block_hash());
    }
}
