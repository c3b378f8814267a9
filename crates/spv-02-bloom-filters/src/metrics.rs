//! Watch-list counters
//!
//! `BloomFilter` never counts anything itself. `FilterService` reports each
//! build, insert and lookup to a `MetricsRecorder`.
//!
//! ```
//! use spv_02_bloom_filters::metrics::{Metrics, MetricsRecorder};
//!
//! let metrics = Metrics::new();
//! metrics.record_lookup(true, false);
//! assert_eq!(metrics.snapshot().lookups_positive, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Sink for filter service events.
pub trait MetricsRecorder: Send + Sync {
    /// A filter of `size_bytes` was built.
    fn record_filter_created(&self, size_bytes: usize);

    /// One item went into the watch list.
    fn record_insert(&self);

    /// One candidate was tested; `saturated` means no hashing was done.
    fn record_lookup(&self, found: bool, saturated: bool);
}

/// Recorder that drops every event.
#[derive(Debug, Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_filter_created(&self, _: usize) {}
    fn record_insert(&self) {}
    fn record_lookup(&self, _: bool, _: bool) {}
}

/// In-process atomic counters.
#[derive(Debug, Default)]
pub struct Metrics {
    filters_created: AtomicU64,
    filter_bytes: AtomicU64,
    elements_inserted: AtomicU64,
    lookups_performed: AtomicU64,
    lookups_positive: AtomicU64,
    lookups_saturated: AtomicU64,
}

impl Metrics {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every counter.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let load = |counter: &AtomicU64| counter.load(Ordering::Relaxed);
        MetricsSnapshot {
            filters_created: load(&self.filters_created),
            filter_bytes: load(&self.filter_bytes),
            elements_inserted: load(&self.elements_inserted),
            lookups_performed: load(&self.lookups_performed),
            lookups_positive: load(&self.lookups_positive),
            lookups_saturated: load(&self.lookups_saturated),
        }
    }
}

impl MetricsRecorder for Metrics {
    fn record_filter_created(&self, size_bytes: usize) {
        self.filters_created.fetch_add(1, Ordering::Relaxed);
        self.filter_bytes
            .fetch_add(size_bytes as u64, Ordering::Relaxed);
    }

    fn record_insert(&self) {
        self.elements_inserted.fetch_add(1, Ordering::Relaxed);
    }

    fn record_lookup(&self, found: bool, saturated: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
        if saturated {
            self.lookups_saturated.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Counter values at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Filters built.
    pub filters_created: u64,
    /// Sum of built filter sizes in bytes.
    pub filter_bytes: u64,
    /// Items added to watch lists.
    pub elements_inserted: u64,
    /// Candidates tested.
    pub lookups_performed: u64,
    /// Candidates that matched, false positives included.
    pub lookups_positive: u64,
    /// Matches answered by a saturated filter.
    pub lookups_saturated: u64,
}
