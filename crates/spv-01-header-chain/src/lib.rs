//! # SPV-01 Header Chain
//!
//! Header index and sync session for an SPV client.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Keep every header a peer sends us in a tree rooted at a fixed genesis,
//! track the tallest branch, and summarize it as a block locator so the
//! peer knows where to continue.
//!
//! ## Rules
//!
//! | Rule | Behavior |
//! |------|----------|
//! | Parent first | A header whose parent is unknown is rejected, nothing stored |
//! | Idempotent | Re-adding a known header returns the existing node |
//! | Best chain | Head moves only to a strictly taller node; ties keep the first seen |
//! | Append-only | Nodes are never removed or re-parented |
//!
//! ## Module Structure
//!
//! ```text
//! spv-01-header-chain/
//! ├── domain/          # BlockHash, BlockHeader, HeaderNode, ChainIndex, errors
//! ├── algorithms/      # Block locator, batch application
//! ├── ports/           # API trait (inbound) + peer sink trait (outbound)
//! ├── application/     # HeaderSyncService driving a getheaders session
//! └── config.rs        # HeaderSyncConfig
//! ```
//!
//! ## Example
//!
//! ```
//! use spv_01_header_chain::{BlockHash, BlockHeader, ChainIndex};
//!
//! let genesis = BlockHeader::mainnet_genesis();
//! let mut index = ChainIndex::from_genesis_header(genesis);
//!
//! let next = BlockHeader {
//!     version: 1,
//!     prev_block: genesis.block_hash(),
//!     merkle_root: BlockHash::ZERO,
//!     timestamp: genesis.timestamp + 600,
//!     bits: genesis.bits,
//!     nonce: 0,
//! };
//! index.add_header(next).unwrap();
//!
//! assert_eq!(index.height(), 1);
//! assert_eq!(index.create_locator().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use algorithms::{apply_headers, build_locator, BatchOutcome, LOCATOR_DENSE_WINDOW};
pub use application::{HeaderSyncService, SyncStats};
pub use config::{HeaderSyncConfig, MAX_HEADERS_PER_MESSAGE};
pub use domain::{
    BlockHash, BlockHeader, ChainError, ChainIndex, ChainTip, HeaderNode, HeaderStatus, NodeId,
    SyncError, HEADER_SIZE,
};
pub use ports::{HeaderRequestSink, HeaderSyncApi, MockPeer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
