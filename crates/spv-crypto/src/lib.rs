//! # SPV Crypto - Hashing Primitives
//!
//! Leaf crate of the workspace. Both the header chain and the Bloom filter
//! build on the two functions exported here.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256d | Block header identity |
//! | `murmur` | MurmurHash3 x86_32 | Bloom filter bit positions |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;
pub mod murmur;

// Re-exports
pub use hashing::{sha256d, Hash, Sha256dHasher};
pub use murmur::murmur3_32;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
