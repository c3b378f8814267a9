//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use spv_02_bloom_filters::{BloomConfigBuilder, BloomFlags};
//!
//! let filter = BloomConfigBuilder::new()
//!     .expected_elements(100)
//!     .target_fpr(0.001)
//!     .flags(BloomFlags::All)
//!     .build()?
//!     .build_filter()?;
//!
//! assert!(filter.hash_functions() > 0);
//! # Ok::<(), spv_02_bloom_filters::FilterError>(())
//! ```

use serde::{Deserialize, Serialize};

use super::bloom_filter::BloomFilter;
use super::flags::BloomFlags;
use super::parameters::{calculate_optimal_parameters, validate_fpr, BloomFilterParams};
use crate::error::FilterError;

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Number of items the client intends to watch (n)
    pub expected_elements: usize,
    /// Target false positive rate, strictly between 0 and 1
    pub target_fpr: f64,
    /// Seed salt
    pub tweak: u32,
    /// Update policy carried for the peer
    pub flags: BloomFlags,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            expected_elements: 50,
            target_fpr: 0.0001, // 0.01% false positive rate
            tweak: 0,
            flags: BloomFlags::None,
        }
    }
}

impl BloomConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), FilterError> {
        validate_fpr(self.target_fpr)?;

        if self.expected_elements == 0 {
            return Err(FilterError::InvalidParameter(
                "expected_elements cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Sizing this configuration resolves to.
    pub fn parameters(&self) -> Result<BloomFilterParams, FilterError> {
        calculate_optimal_parameters(self.expected_elements, self.target_fpr)
    }

    /// Build an empty filter from this configuration.
    pub fn build_filter(&self) -> Result<BloomFilter, FilterError> {
        let params = self.parameters()?;
        BloomFilter::new(
            params.size_bytes,
            params.hash_functions,
            self.tweak,
            self.flags,
        )
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    expected_elements: Option<usize>,
    target_fpr: Option<f64>,
    tweak: Option<u32>,
    flags: Option<BloomFlags>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of items to watch
    pub fn expected_elements(mut self, elements: usize) -> Self {
        self.expected_elements = Some(elements);
        self
    }

    /// Set target false positive rate
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Set a fixed tweak
    pub fn tweak(mut self, tweak: u32) -> Self {
        self.tweak = Some(tweak);
        self
    }

    /// Draw the tweak from the thread RNG
    pub fn random_tweak(mut self) -> Self {
        self.tweak = Some(rand::random());
        self
    }

    /// Set the update policy
    pub fn flags(mut self, flags: BloomFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let defaults = BloomConfig::default();

        let config = BloomConfig {
            expected_elements: self.expected_elements.unwrap_or(defaults.expected_elements),
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
            tweak: self.tweak.unwrap_or(defaults.tweak),
            flags: self.flags.unwrap_or(defaults.flags),
        };

        config.validate()?;
        Ok(config)
    }
}
