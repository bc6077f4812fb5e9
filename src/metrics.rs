use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters describing cookbook activity.
#[derive(Default)]
pub struct CookbookMetrics {
    entries_inserted: AtomicU64,
    entries_rejected: AtomicU64,
    summaries_resolved: AtomicU64,
    summaries_failed: AtomicU64,
}

impl CookbookMetrics {
    /// Create an empty metrics accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of an insertion attempt.
    pub fn record_insert(&self, accepted: bool) {
        let counter = if accepted {
            &self.entries_inserted
        } else {
            &self.entries_rejected
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome of a summary request.
    pub fn record_summary(&self, resolved: bool) {
        let counter = if resolved {
            &self.summaries_resolved
        } else {
            &self.summaries_failed
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Return a snapshot of the current counters alongside the registry size.
    pub fn snapshot(&self, registry_size: usize) -> MetricsSnapshot {
        MetricsSnapshot {
            entries_inserted: self.entries_inserted.load(Ordering::Relaxed),
            entries_rejected: self.entries_rejected.load(Ordering::Relaxed),
            summaries_resolved: self.summaries_resolved.load(Ordering::Relaxed),
            summaries_failed: self.summaries_failed.load(Ordering::Relaxed),
            registry_size: registry_size as u64,
        }
    }
}

/// Immutable view of cookbook counters used for reporting.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct MetricsSnapshot {
    /// Entries admitted since startup.
    pub entries_inserted: u64,
    /// Insertion attempts rejected by validation.
    pub entries_rejected: u64,
    /// Summary requests that resolved successfully.
    pub summaries_resolved: u64,
    /// Summary requests that failed.
    pub summaries_failed: u64,
    /// Entries currently held by the registry.
    pub registry_size: u64,
}
