use crate::obs::sink::{ExecKind, MetricsEvent, MetricsSink};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

///
/// CounterSink
/// Lock-free process-local counters. Usable as a `static`.
///

#[derive(Debug, Default)]
pub struct CounterSink {
    create_calls: AtomicU64,
    read_calls: AtomicU64,
    rows_written: AtomicU64,
    rows_loaded: AtomicU64,
    index_adds: AtomicU64,
    dangling_members: AtomicU64,
}

impl CounterSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            create_calls: AtomicU64::new(0),
            read_calls: AtomicU64::new(0),
            rows_written: AtomicU64::new(0),
            rows_loaded: AtomicU64::new(0),
            index_adds: AtomicU64::new(0),
            dangling_members: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            create_calls: self.create_calls.load(Ordering::Relaxed),
            read_calls: self.read_calls.load(Ordering::Relaxed),
            rows_written: self.rows_written.load(Ordering::Relaxed),
            rows_loaded: self.rows_loaded.load(Ordering::Relaxed),
            index_adds: self.index_adds.load(Ordering::Relaxed),
            dangling_members: self.dangling_members.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters (useful in tests).
    pub fn reset(&self) {
        for counter in [
            &self.create_calls,
            &self.read_calls,
            &self.rows_written,
            &self.rows_loaded,
            &self.index_adds,
            &self.dangling_members,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl MetricsSink for CounterSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::ExecStart { kind, .. } => {
                let counter = if kind.is_write() {
                    &self.create_calls
                } else {
                    &self.read_calls
                };
                counter.fetch_add(1, Ordering::Relaxed);
            }
            MetricsEvent::ExecFinish { kind, rows, .. } => {
                let counter = if kind == ExecKind::Create {
                    &self.rows_written
                } else {
                    &self.rows_loaded
                };
                counter.fetch_add(rows, Ordering::Relaxed);
            }
            MetricsEvent::IndexAdds { adds, .. } => {
                self.index_adds.fetch_add(adds, Ordering::Relaxed);
            }
            MetricsEvent::DanglingMembers { count, .. } => {
                self.dangling_members.fetch_add(count, Ordering::Relaxed);
            }
        }
    }
}

///
/// MetricsSnapshot
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub create_calls: u64,
    pub read_calls: u64,
    pub rows_written: u64,
    pub rows_loaded: u64,
    pub index_adds: u64,
    pub dangling_members: u64,
}
