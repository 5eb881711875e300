//! Dispatch metrics for observability
//!
//! Delivery is fire-and-forget, so the logging caller never sees a failure.
//! These counters are the observable side channel for that loss: nothing
//! here ever reaches the caller as an error.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct DispatchMetrics {
    /// Records fully delivered to every enabled sink.
    delivered: AtomicU64,
    /// Records dropped because the dispatch queue was full.
    dropped: AtomicU64,
    /// Individual sink write/flush failures (the record itself may still
    /// have reached other sinks).
    sink_errors: AtomicU64,
}

impl DispatchMetrics {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_errors(&self) -> u64 {
        self.sink_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_error(&self) -> u64 {
        self.sink_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Fraction of records lost to queue overflow, as a percentage.
    /// Returns 0.0 when nothing has been dispatched.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped() as f64;
        let total = self.delivered() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    /// Reset all counters to zero. Intended for tests.
    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
        self.sink_errors.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}
