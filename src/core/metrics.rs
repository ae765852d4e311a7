//! Pipeline counters
//!
//! Counts records handed to processors and failures the pipeline absorbed
//! on the caller's behalf.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every logger of one producer.
///
/// # Example
///
/// ```
/// use rust_log_bridge::PipelineMetrics;
///
/// let metrics = PipelineMetrics::new();
/// metrics.record_emitted();
/// metrics.record_processor_panic();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.processor_panic_count(), 1);
/// ```
#[derive(Debug)]
pub struct PipelineMetrics {
    /// Records forwarded to the processor
    emitted: AtomicU64,

    /// Emissions whose processor call panicked
    processor_panics: AtomicU64,
}

impl PipelineMetrics {
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            processor_panics: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn processor_panic_count(&self) -> u64 {
        self.processor_panics.load(Ordering::Relaxed)
    }

    /// Returns the previous count.
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the previous count.
    #[inline]
    pub fn record_processor_panic(&self) -> u64 {
        self.processor_panics.fetch_add(1, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.processor_panics.store(0, Ordering::Relaxed);
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PipelineMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            emitted: AtomicU64::new(self.emitted_count()),
            processor_panics: AtomicU64::new(self.processor_panic_count()),
        }
    }
}
