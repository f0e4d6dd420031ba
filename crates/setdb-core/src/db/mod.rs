//! Module: db
//! Responsibility: keep primary records, collection sets, and index sets
//! mutually consistent on write, and resolve them back into typed records
//! on read.
//!
//! ## Consistency contract
//!
//! This layer holds no in-process mutable state and takes no locks. Each
//! store call is atomic for its own key, but `create` is a sequence of
//! calls (primary write, collection add, one add per index), not a
//! transaction:
//!
//! - A reader racing a writer on the same id may see the record before
//!   every index add has landed, or an index member before the record's
//!   collection add. Once `create` returns, every later read is consistent
//!   with it (read-your-writes eventually, not linearizable).
//! - Concurrent creates of different ids never touch the same primary key
//!   and only ever add distinct members to shared sets.
//! - Concurrent creates of the same id race per key, last write wins. The
//!   surviving record may be indexed under the losing write's values too.
//! - Re-writing an id with a changed indexed value leaves the old index
//!   membership in place (stale index). Lookups over-include; `get` and the
//!   decoded record are always current.

pub mod key;
pub mod store;

mod consistency;
mod read;
mod write;


pub use consistency::ReadConsistency;
pub use key::{CollectionKey, IndexKey, PrimaryKey, collection_key, index_key, primary_key};
pub use store::{KvStore, MemoryStore, StoreError};
pub use write::WriteReport;

use crate::obs::sink::MetricsSink;

///
/// IndexedStore
///
/// Typed records over a [`KvStore`], with a collection set per type and
/// foreign-key/field index sets.
///
/// The store handle is passed in explicitly; clone or share it (`&S`,
/// `Arc<S>`) to run several `IndexedStore`s over one backend.
///

pub struct IndexedStore<S: KvStore> {
    store: S,
    consistency: ReadConsistency,
    metrics: Option<&'static dyn MetricsSink>,
}

impl<S: KvStore> IndexedStore<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            consistency: ReadConsistency::MissingOk,
            metrics: None,
        }
    }

    /// Set how index members without a primary record are handled on read.
    #[must_use]
    pub const fn with_consistency(mut self, consistency: ReadConsistency) -> Self {
        self.consistency = consistency;
        self
    }

    /// Route operation counters to `sink`.
    #[must_use]
    pub const fn with_metrics(mut self, sink: &'static dyn MetricsSink) -> Self {
        self.metrics = Some(sink);
        self
    }

    #[must_use]
    pub const fn consistency(&self) -> ReadConsistency {
        self.consistency
    }

    /// Borrow the underlying store handle.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store handle.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.store
    }

    const fn sink(&self) -> Option<&'static dyn MetricsSink> {
        self.metrics
    }
}

impl<S: KvStore + Clone> Clone for IndexedStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            consistency: self.consistency,
            metrics: self.metrics,
        }
    }
}
