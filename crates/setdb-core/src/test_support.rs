use crate::db::{KvStore, MemoryStore, StoreError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

///
/// FaultyStore
///
/// `MemoryStore` wrapper that fails on demand, for propagation tests.
/// Mutations (`string_set`, `set_add`) succeed `writes_left` times, then fail.
///

#[derive(Debug, Default)]
pub(crate) struct FaultyStore {
    pub(crate) inner: MemoryStore,
    writes_left: AtomicUsize,
    fail_reads: AtomicBool,
    short_multi_get: AtomicBool,
}

impl FaultyStore {
    pub(crate) fn new() -> Self {
        Self {
            writes_left: AtomicUsize::new(usize::MAX),
            ..Self::default()
        }
    }

    pub(crate) fn fail_after_writes(&self, writes: usize) {
        self.writes_left.store(writes, Ordering::SeqCst);
    }

    pub(crate) fn heal(&self) {
        self.writes_left.store(usize::MAX, Ordering::SeqCst);
        self.fail_reads.store(false, Ordering::SeqCst);
        self.short_multi_get.store(false, Ordering::SeqCst);
    }

    pub(crate) fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub(crate) fn short_multi_get(&self) {
        self.short_multi_get.store(true, Ordering::SeqCst);
    }

    fn take_write(&self) -> Result<(), StoreError> {
        self.writes_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .map(|_| ())
            .map_err(|_| StoreError::unavailable("injected write failure"))
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("injected read failure"));
        }

        Ok(())
    }
}

impl KvStore for FaultyStore {
    fn string_set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.take_write()?;
        self.inner.string_set(key, value)
    }

    fn string_get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.check_read()?;
        self.inner.string_get(key)
    }

    fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        self.take_write()?;
        self.inner.set_add(key, member)
    }

    fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        self.check_read()?;
        self.inner.set_members(key)
    }

    fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<Vec<u8>>>, StoreError> {
        self.check_read()?;
        let mut slots = self.inner.multi_get(keys)?;
        if self.short_multi_get.load(Ordering::SeqCst) {
            slots.pop();
        }

        Ok(slots)
    }
}
