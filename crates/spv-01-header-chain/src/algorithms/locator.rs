//! # Block Locator
//!
//! Compact summary of a chain for `getheaders` requests.

use crate::domain::BlockHash;

/// Number of most recent hashes sent one by one.
pub const LOCATOR_DENSE_WINDOW: usize = 10;

/// Build a locator from a head-to-genesis path.
///
/// The first `LOCATOR_DENSE_WINDOW` entries are copied as-is. Beyond that,
/// entries are taken at offsets 1, 2, 4, 8, ... past the last dense entry
/// while they stay within the path.
pub fn build_locator(path: &[BlockHash]) -> Vec<BlockHash> {
    let dense = path.len().min(LOCATOR_DENSE_WINDOW);
    let mut locator = path[..dense].to_vec();

    if path.len() <= LOCATOR_DENSE_WINDOW {
        return locator;
    }

    let tail = &path[LOCATOR_DENSE_WINDOW - 1..];
    let mut step = 1usize;
    while step < tail.len() {
        locator.push(tail[step]);
        step <<= 1;
    }

    locator
}
