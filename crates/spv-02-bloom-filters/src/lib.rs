//! # SPV-02 Bloom Filters
//!
//! Probabilistic membership filter a light client hands to its peers so they
//! only relay matching transactions, without learning the exact watch list.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: Bit vector + seeded Murmur3 rounds
//!   - `parameters`: Closed-form sizing (`ideal_size`, `ideal_hash_count`)
//!   - `BloomConfig` / `BloomConfigBuilder`: Validated construction
//!   - `BloomFlags`: Update policy byte carried for the peer
//!
//! - **Service Layer** (`service/`): `FilterService`, the watch-list consumer
//!   that records `metrics` around every operation
//!
//! ## Invariants
//!
//! - Bits are never cleared once set
//! - No false negatives: after `insert(x)`, `contains(x)` is true
//! - A one-byte `0xFF` vector is saturated and matches everything
//!
//! ## Usage Example
//!
//! ```
//! use spv_02_bloom_filters::{BloomFilter, BloomFlags};
//!
//! let mut filter = BloomFilter::for_elements(3, 0.01, 0, BloomFlags::All)?;
//! filter.insert(b"watched-address");
//!
//! assert!(filter.contains(b"watched-address"));
//! # Ok::<(), spv_02_bloom_filters::FilterError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod error;
pub mod metrics;
pub mod service;

// Re-exports for convenience
pub use domain::{
    ideal_hash_count, ideal_size, BloomConfig, BloomConfigBuilder, BloomFilter, BloomFlags,
    MAX_FILTER_SIZE_BYTES, MAX_HASH_FUNCS,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use service::FilterService;
