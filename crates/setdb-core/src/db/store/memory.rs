use crate::db::store::{KvStore, StoreError};
use std::{
    collections::{BTreeSet, HashMap},
    sync::{Mutex, MutexGuard},
};

///
/// Entry
///

#[derive(Clone, Debug)]
enum Entry {
    String(Vec<u8>),
    Set(BTreeSet<String>),
}

///
/// MemoryStore
///
/// In-process backend. One mutex guards the whole keyspace, so each call is
/// atomic for the key it touches, and no call spans keys.
///
/// Value kinds follow Redis: `string_set` overwrites whatever the key held,
/// while set and string reads or set adds against the other kind fail with
/// [`StoreError::WrongType`].
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held (strings and sets).
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.is_empty())
    }

    /// All keys, sorted. Diagnostic only.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<_> = self.lock()?.keys().cloned().collect();
        keys.sort();

        Ok(keys)
    }

    /// Drop every key.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.lock()?.clear();

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Entry>>, StoreError> {
        self.entries.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl KvStore for MemoryStore {
    fn string_set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        // replaces a value of either kind, like Redis SET
        self.lock()?.insert(key.to_string(), Entry::String(value));

        Ok(())
    }

    fn string_get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match self.lock()?.get(key) {
            None => Ok(None),
            Some(Entry::String(bytes)) => Ok(Some(bytes.clone())),
            Some(Entry::Set(_)) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let mut entries = self.lock()?;
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Set(BTreeSet::new()));

        match entry {
            Entry::Set(members) => Ok(members.insert(member.to_string())),
            Entry::String(_) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        match self.lock()?.get(key) {
            None => Ok(Vec::new()),
            Some(Entry::Set(members)) => Ok(members.iter().cloned().collect()),
            Some(Entry::String(_)) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    // Set-typed slots read as missing, matching a Redis MGET.
    fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<Vec<u8>>>, StoreError> {
        let entries = self.lock()?;

        Ok(keys
            .iter()
            .map(|key| match entries.get(*key) {
                Some(Entry::String(bytes)) => Some(bytes.clone()),
                Some(Entry::Set(_)) | None => None,
            })
            .collect())
    }
}
