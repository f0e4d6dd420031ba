//! Module: store
//! Responsibility: the key-value store boundary the indexed layer runs on.
//! Does not own: retries, timeouts, connection lifecycle.
//!
//! The boundary is synchronous, like the rest of the crate. A client for a
//! networked store blocks inside each call; async callers run the
//! `IndexedStore` operations on a blocking worker.
//!
//! Every method is atomic for the single key it touches; nothing here spans
//! keys. Backends surface their own faults as [`StoreError`] and the layer
//! above propagates them unchanged.

mod memory;


pub use memory::MemoryStore;

use std::sync::Arc;
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("operation against a key holding the wrong kind of value: {key}")]
    WrongType { key: String },

    #[error("store state poisoned by a panicked writer")]
    Poisoned,
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

///
/// KvStore
///
/// String values plus unordered string sets.
///

pub trait KvStore {
    /// Overwrite `key` with `value`.
    fn string_set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Read `key`; `None` when absent.
    fn string_get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Add `member` to the set at `key`, creating it if needed.
    /// Returns `false` if the member was already present.
    fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError>;

    /// All members of the set at `key`, in no particular order.
    /// An absent set reads as empty.
    fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Batched read; one slot per input key, in input order.
    fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<Vec<u8>>>, StoreError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn string_set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        (**self).string_set(key, value)
    }

    fn string_get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).string_get(key)
    }

    fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        (**self).set_add(key, member)
    }

    fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        (**self).set_members(key)
    }

    fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<Vec<u8>>>, StoreError> {
        (**self).multi_get(keys)
    }
}

impl<S: KvStore + ?Sized> KvStore for Arc<S> {
    fn string_set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        (**self).string_set(key, value)
    }

    fn string_get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).string_get(key)
    }

    fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        (**self).set_add(key, member)
    }

    fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        (**self).set_members(key)
    }

    fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<Vec<u8>>>, StoreError> {
        (**self).multi_get(keys)
    }
}
