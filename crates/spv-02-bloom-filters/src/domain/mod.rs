//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Hash position derivation
//! - Parameter calculations
//! - Configuration
//! - Update policy flags
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod bloom_filter;
pub mod config;
pub mod flags;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use flags::BloomFlags;
pub use parameters::{
    calculate_fpr, calculate_optimal_parameters, ideal_hash_count, ideal_size, BloomFilterParams,
    MAX_FILTER_SIZE_BYTES, MAX_HASH_FUNCS,
};
