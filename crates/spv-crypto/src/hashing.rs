//! # SHA-256d Hashing
//!
//! Double-round SHA-256 as used for block header identities:
//! `SHA-256(SHA-256(data))`.

use sha2::{Digest, Sha256};

/// SHA-256d output (256-bit), in internal byte order.
pub type Hash = [u8; 32];

/// Stateful SHA-256d hasher.
///
/// The first round is streamed; the second round runs once in `finalize`.
#[derive(Clone, Default)]
pub struct Sha256dHasher {
    inner: Sha256,
}

impl Sha256dHasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Hash {
        let first = self.inner.finalize();
        Sha256::digest(first).into()
    }
}

/// Hash data with SHA-256d (one-shot).
pub fn sha256d(data: &[u8]) -> Hash {
    Sha256::digest(Sha256::digest(data)).into()
}
