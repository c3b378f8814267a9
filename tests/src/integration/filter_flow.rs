//! # Filter Flow
//!
//! A wallet builds a filter over its watch list, hands the raw vector to
//! the wire layer, and a peer rebuilds it to test what it relays.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::{Rng, SeedableRng};
    use spv_01_header_chain::BlockHeader;
    use spv_02_bloom_filters::{
        metrics::Metrics, BloomConfigBuilder, BloomFilter, BloomFlags, FilterService,
    };
    use spv_crypto::sha256d;

    use crate::fixtures::{hashes, header_chain};

    /// Twenty-byte key hashes standing in for wallet addresses.
    fn wallet_keys(count: usize, seed: u64) -> Vec<[u8; 20]> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        (0..count).map(|_| rng.gen()).collect()
    }

    #[test]
    fn test_wallet_filter_survives_wire_transfer() {
        let keys = wallet_keys(50, 1);
        let config = BloomConfigBuilder::new()
            .expected_elements(keys.len())
            .target_fpr(0.0001)
            .random_tweak()
            .flags(BloomFlags::P2PubKeyOnly)
            .build()
            .unwrap();

        let mut wallet = FilterService::new(&config).unwrap();
        wallet.watch_all(&keys);

        // What `filterload` carries
        let sent = wallet.filter();
        let received = BloomFilter::from_raw(
            sent.as_bytes().to_vec(),
            sent.hash_functions(),
            sent.tweak(),
            sent.flags(),
        )
        .unwrap();

        for key in &keys {
            assert!(received.contains(key), "peer must relay every wallet key");
        }
        assert_eq!(received.flags(), BloomFlags::P2PubKeyOnly.as_byte());
        assert_eq!(received.policy(), BloomFlags::P2PubKeyOnly);
        assert_eq!(received.as_bytes(), sent.as_bytes());
    }

    #[test]
    fn test_observed_false_positive_rate_near_target() {
        let keys = wallet_keys(500, 2);
        let config = BloomConfigBuilder::new()
            .expected_elements(500)
            .target_fpr(0.001)
            .tweak(7)
            .build()
            .unwrap();

        let metrics = Arc::new(Metrics::new());
        let mut service = FilterService::with_metrics(&config, Arc::clone(&metrics)).unwrap();
        service.watch_all(&keys);

        let strangers = wallet_keys(20_000, 3);
        let hits = strangers.iter().filter(|k| service.matches(&k[..])).count();

        // Target is 0.1%; allow generous slack for a 20k sample
        assert!(hits < 100, "too many false positives: {}", hits);
        assert_eq!(metrics.snapshot().lookups_performed, 20_000);
        assert_eq!(metrics.snapshot().lookups_positive, hits as u64);
        assert!(service.filter().estimated_false_positive_rate() < 0.01);
    }

    #[test]
    fn test_filter_over_header_hashes() {
        let genesis = BlockHeader::mainnet_genesis();
        let chain = header_chain(&genesis, 40, 0);
        let block_hashes = hashes(&chain);

        let mut filter = BloomFilter::for_elements(20, 0.0001, 0, BloomFlags::None).unwrap();
        for hash in block_hashes.iter().step_by(2) {
            filter.insert(hash.as_bytes());
        }

        for hash in block_hashes.iter().step_by(2) {
            assert!(filter.contains(hash.as_bytes()));
        }
        let strays = block_hashes
            .iter()
            .skip(1)
            .step_by(2)
            .filter(|h| filter.contains(h.as_bytes()))
            .count();
        assert!(strays <= 1);
    }

    #[test]
    fn test_match_all_relays_everything() {
        let filter = BloomFilter::match_all();
        for i in 0u32..100 {
            assert!(filter.contains(&sha256d(&i.to_le_bytes())));
        }
        assert!(filter.is_saturated());
    }
}
