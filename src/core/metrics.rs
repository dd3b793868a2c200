//! Registry metrics for observability
//!
//! Counters for monitoring filtering behavior and sink health: how many
//! records passed the threshold check, how many were filtered out, and how
//! many accepted records the sink failed to deliver.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for registry observability
///
/// # Example
///
/// ```
/// use hierlog::RegistryMetrics;
///
/// let metrics = RegistryMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct RegistryMetrics {
    /// Records that passed filtering and were handed to the sink
    emitted_count: AtomicU64,

    /// Records filtered out by the effective threshold
    suppressed_count: AtomicU64,

    /// Accepted records the sink failed to deliver
    delivery_failures: AtomicU64,
}

impl RegistryMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted_count: AtomicU64::new(0),
            suppressed_count: AtomicU64::new(0),
            delivery_failures: AtomicU64::new(0),
        }
    }

    /// Get the number of emitted records
    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted_count.load(Ordering::Relaxed)
    }

    /// Get the number of suppressed records
    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed_count.load(Ordering::Relaxed)
    }

    /// Get the number of delivery failures
    #[inline]
    pub fn delivery_failures(&self) -> u64 {
        self.delivery_failures.load(Ordering::Relaxed)
    }

    /// Record an emitted record
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a suppressed record
    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed delivery
    #[inline]
    pub fn record_delivery_failure(&self) -> u64 {
        self.delivery_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Get suppression rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no log calls have been made.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed_count() as f64;
        let total = self.emitted_count() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.emitted_count.store(0, Ordering::Relaxed);
        self.suppressed_count.store(0, Ordering::Relaxed);
        self.delivery_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for RegistryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RegistryMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            emitted_count: AtomicU64::new(self.emitted_count()),
            suppressed_count: AtomicU64::new(self.suppressed_count()),
            delivery_failures: AtomicU64::new(self.delivery_failures()),
        }
    }
}
