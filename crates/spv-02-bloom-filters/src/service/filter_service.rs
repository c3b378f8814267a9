//! Filter Service
//!
//! Wraps a single `BloomFilter` for the component that decides which
//! addresses and transaction ids the client cares about. The service is
//! single-writer: `watch` takes `&mut self`, `matches` only `&self`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{BloomConfig, BloomFilter};
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};

/// Watch-list filter with metrics.
pub struct FilterService<R: MetricsRecorder = NoOpMetrics> {
    filter: BloomFilter,
    metrics: Arc<R>,
}

impl FilterService<NoOpMetrics> {
    /// Create a service without metrics.
    pub fn new(config: &BloomConfig) -> Result<Self, FilterError> {
        Self::with_metrics(config, Arc::new(NoOpMetrics))
    }
}

impl<R: MetricsRecorder> FilterService<R> {
    /// Create a service recording into `metrics`.
    pub fn with_metrics(config: &BloomConfig, metrics: Arc<R>) -> Result<Self, FilterError> {
        config.validate()?;
        let filter = config.build_filter()?;

        metrics.record_filter_created(filter.len());
        info!(
            size_bytes = filter.len(),
            hash_functions = filter.hash_functions(),
            tweak = filter.tweak(),
            expected_elements = config.expected_elements,
            "Bloom filter created"
        );

        Ok(Self { filter, metrics })
    }

    /// Add one item to the watch list.
    pub fn watch(&mut self, item: &[u8]) {
        self.filter.insert(item);
        self.metrics.record_insert();
    }

    /// Add every item of `items` to the watch list.
    pub fn watch_all<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        for item in items {
            self.watch(item.as_ref());
        }
        debug!(
            elements = self.filter.elements_inserted(),
            bits_set = self.filter.bits_set(),
            "Watch list updated"
        );
    }

    /// Test an observed candidate against the watch list.
    pub fn matches(&self, item: &[u8]) -> bool {
        let saturated = self.filter.is_saturated();
        let found = self.filter.contains(item);
        self.metrics.record_lookup(found, saturated);
        found
    }

    /// The filter, for handing to the wire layer.
    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    /// Metrics recorder.
    pub fn metrics(&self) -> &Arc<R> {
        &self.metrics
    }
}
