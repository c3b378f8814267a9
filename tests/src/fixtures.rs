//! # Fixtures
//!
//! Synthetic header chains. Headers are well-formed but carry no valid
//! proof of work; the index never checks it.

use spv_01_header_chain::{BlockHash, BlockHeader};

/// Ten minutes, the nominal block interval.
pub const BLOCK_INTERVAL: u32 = 600;

/// Build `count` headers extending `parent`, first child first.
///
/// `branch` is mixed into the merkle root so two calls from the same parent
/// produce distinct forks.
pub fn header_chain(parent: &BlockHeader, count: usize, branch: u8) -> Vec<BlockHeader> {
    let mut prev = *parent;
    let mut headers = Vec::with_capacity(count);
    for i in 0..count {
        let mut merkle = [branch; 32];
        merkle[..8].copy_from_slice(&(i as u64).to_le_bytes());

        let header = BlockHeader {
            version: 0x2000_0000,
            prev_block: prev.block_hash(),
            merkle_root: BlockHash::from_bytes(merkle),
            timestamp: prev.timestamp.wrapping_add(BLOCK_INTERVAL),
            bits: prev.bits,
            nonce: i as u32,
        };
        headers.push(header);
        prev = header;
    }
    headers
}

/// Hashes of `headers`, same order.
pub fn hashes(headers: &[BlockHeader]) -> Vec<BlockHash> {
    headers.iter().map(BlockHeader::block_hash).collect()
}
