//! # Domain Entities
//!
//! Block headers and the nodes the chain index stores them in.

use serde::{Deserialize, Serialize};
use spv_crypto::sha256d;

use super::errors::ChainError;
use super::value_objects::{BlockHash, NodeId};

/// Serialized header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Bitcoin block header.
///
/// Field order and little-endian encoding follow the wire layout; the
/// identity hash is taken over exactly those 80 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block version.
    pub version: i32,
    /// Identity of the preceding header.
    pub prev_block: BlockHash,
    /// Merkle root of the block's transactions.
    pub merkle_root: BlockHash,
    /// Unix timestamp.
    pub timestamp: u32,
    /// Compact difficulty target.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
}

impl BlockHeader {
    /// Bitcoin mainnet genesis header.
    pub fn mainnet_genesis() -> Self {
        Self {
            version: 1,
            prev_block: BlockHash::ZERO,
            merkle_root: BlockHash::from_bytes([
                0x3b, 0xa3, 0xed, 0xfd, 0x7a, 0x7b, 0x12, 0xb2, 0x7a, 0xc7, 0x2c, 0x3e, 0x67, 0x76,
                0x8f, 0x61, 0x7f, 0xc8, 0x1b, 0xc3, 0x88, 0x8a, 0x51, 0x32, 0x3a, 0x9f, 0xb8, 0xaa,
                0x4b, 0x1e, 0x5e, 0x4a,
            ]),
            timestamp: 1_231_006_505,
            bits: 0x1d00_ffff,
            nonce: 2_083_236_893,
        }
    }

    /// Serialize to the 80-byte wire layout.
    pub fn consensus_encode(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.prev_block.as_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// Parse the 80-byte wire layout.
    pub fn consensus_decode(bytes: &[u8]) -> Result<Self, ChainError> {
        let raw: &[u8; HEADER_SIZE] = bytes
            .try_into()
            .map_err(|_| ChainError::InvalidHeaderLength { len: bytes.len() })?;

        let word = |at: usize| [raw[at], raw[at + 1], raw[at + 2], raw[at + 3]];
        let mut prev_block = [0u8; 32];
        prev_block.copy_from_slice(&raw[4..36]);
        let mut merkle_root = [0u8; 32];
        merkle_root.copy_from_slice(&raw[36..68]);

        Ok(Self {
            version: i32::from_le_bytes(word(0)),
            prev_block: BlockHash::from_bytes(prev_block),
            merkle_root: BlockHash::from_bytes(merkle_root),
            timestamp: u32::from_le_bytes(word(68)),
            bits: u32::from_le_bytes(word(72)),
            nonce: u32::from_le_bytes(word(76)),
        })
    }

    /// Identity hash: SHA-256d of the serialized header.
    pub fn block_hash(&self) -> BlockHash {
        BlockHash::from_bytes(sha256d(&self.consensus_encode()))
    }
}

/// A header stored in the chain index.
#[derive(Clone, Debug)]
pub struct HeaderNode {
    pub(crate) id: NodeId,
    pub(crate) hash: BlockHash,
    pub(crate) header: Option<BlockHeader>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) height: u64,
}

impl HeaderNode {
    /// Arena handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Identity hash.
    pub fn hash(&self) -> BlockHash {
        self.hash
    }

    /// The header, absent only for a genesis anchor created from a bare hash.
    pub fn header(&self) -> Option<&BlockHeader> {
        self.header.as_ref()
    }

    /// Parent handle; `None` for genesis.
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child handles in insertion order.
    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }

    /// Distance from genesis.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// True for the genesis anchor.
    pub fn is_genesis(&self) -> bool {
        self.parent.is_none()
    }
}
