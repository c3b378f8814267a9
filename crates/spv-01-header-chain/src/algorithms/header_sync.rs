//! # Header Sync
//!
//! Applying a `headers` batch to the chain index.

use serde::{Deserialize, Serialize};

use crate::domain::{BlockHash, BlockHeader, ChainError, ChainIndex, ChainTip, HeaderStatus};

/// Result of applying one batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Headers that created new nodes.
    pub accepted: usize,
    /// Headers that were already indexed.
    pub duplicates: usize,
    /// Headers rejected because their parent is unknown.
    pub orphaned: Vec<BlockHash>,
    /// Chain tip after the batch.
    pub tip: ChainTip,
}

impl BatchOutcome {
    /// Headers in the batch.
    pub fn total(&self) -> usize {
        self.accepted + self.duplicates + self.orphaned.len()
    }

    /// True if the batch added nothing new.
    pub fn is_stale(&self) -> bool {
        self.accepted == 0
    }
}

/// Add every header of `headers` to `index`, in order.
///
/// Orphans are recorded and skipped; later headers in the batch are still
/// tried, since a fork may branch off a block we do know. Any other chain
/// error stops the batch and is returned; headers before it stay indexed.
pub fn apply_headers(
    index: &mut ChainIndex,
    headers: &[BlockHeader],
) -> Result<BatchOutcome, ChainError> {
    let mut accepted = 0;
    let mut duplicates = 0;
    let mut orphaned = Vec::new();

    for header in headers {
        match index.connect_header(*header) {
            Ok((_, HeaderStatus::Connected)) => accepted += 1,
            Ok((_, HeaderStatus::Duplicate)) => duplicates += 1,
            Err(ChainError::UnknownParent { hash, .. }) => orphaned.push(hash),
            Err(err) => return Err(err),
        }
    }

    Ok(BatchOutcome {
        accepted,
        duplicates,
        orphaned,
        tip: index.tip(),
    })
}
