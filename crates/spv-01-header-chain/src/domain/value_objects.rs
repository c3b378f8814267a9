//! # Domain Value Objects
//!
//! Immutable value types for the header chain.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::ChainError;

/// Block identity: SHA-256d of the 80-byte header, in internal byte order.
///
/// Displays byte-reversed, the way block explorers and peers print hashes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockHash([u8; 32]);

impl BlockHash {
    /// All-zero hash, the `prev_block` of a chain's first header.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap bytes in internal order.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Bytes in internal order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy of the bytes in internal order.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Parse the reversed-hex display form.
    pub fn from_hex(s: &str) -> Result<Self, ChainError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| ChainError::InvalidHash(format!("{}: {}", s, e)))?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl From<[u8; 32]> for BlockHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = self.0;
        bytes.reverse();
        f.write_str(&hex::encode(bytes))
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", self)
    }
}

/// Handle of a node inside a `ChainIndex` arena.
///
/// Only meaningful for the index that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena slot.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Current chain tip information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainTip {
    /// Current tip block hash.
    pub hash: BlockHash,
    /// Current tip block height.
    pub height: u64,
}

impl ChainTip {
    /// Create a new chain tip.
    pub fn new(hash: BlockHash, height: u64) -> Self {
        Self { hash, height }
    }
}

/// Whether `connect_header` stored a new node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStatus {
    /// New node linked under its parent.
    Connected,
    /// Already indexed; the existing node was returned.
    Duplicate,
}
